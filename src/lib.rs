//! Driver for the Toshiba TB9051FTG single brushed DC motor driver, as found on the
//! Pololu 2997 carrier.
//!
//! The driver turns a signed voltage command into EN/PWM1/PWM2 pin states and reads
//! motor current back from the OCM pin. All hardware access goes through the
//! [`Platform`] trait, so the same driver runs on a board HAL ([`hal::HalPlatform`])
//! or against [`mock::MockPlatform`] in tests.
//!
//! Wiring expected by the driver:
//!
//! | Carrier pin | Connection |
//! | ----------- | ---------- |
//! | EN          | `PinMap::en` |
//! | ENB         | tied low |
//! | PWM1        | `PinMap::pwm1` (forward) |
//! | PWM2        | `PinMap::pwm2` (reverse) |
//! | OCM         | `PinMap::fb` (analog current sense) |
//! | DIAG        | unused |
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod hal;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod motors;
pub mod platform;

pub use config::{ConfigError, CurrentSense, DriverCreator, MotorConfig, PinMap};
pub use motors::{tb9051ftg::Tb9051ftg, Direction, Motor};
pub use platform::{Level, Platform, ADC_MAX, PWM_MAX};

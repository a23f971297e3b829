//! [`Platform`] over `embedded-hal` 1.0 pins.
//!
//! Typestate HALs configure pin modes when the pin is split off its port, so
//! `configure_digital_output` has nothing left to do here. Pins are addressed by
//! their role on the carrier instead of a pin number.

use embedded_hal::{digital::OutputPin, pwm::SetDutyCycle};
use log::{trace, warn};

use crate::config::PinMap;
use crate::platform::{Level, Platform, PWM_MAX};

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgePin {
    En,
    Pwm1,
    Pwm2,
    Ocm,
}

/// The only pin map a [`HalPlatform`] understands.
pub const BRIDGE_PINS: PinMap<BridgePin> = PinMap {
    en: BridgePin::En,
    pwm1: BridgePin::Pwm1,
    pwm2: BridgePin::Pwm2,
    fb: BridgePin::Ocm,
};

/// One-shot read of the OCM analog input.
pub trait AnalogRead {
    fn read_sample(&mut self) -> u16;
}

impl<F: FnMut() -> u16> AnalogRead for F {
    fn read_sample(&mut self) -> u16 {
        self()
    }
}

pub struct HalPlatform<EN, P1, P2, A> {
    enable: EN,
    pwm1: P1,
    pwm2: P2,
    ocm: A,
}

impl<EN, P1, P2, A> HalPlatform<EN, P1, P2, A>
where
    EN: OutputPin,
    P1: SetDutyCycle,
    P2: SetDutyCycle,
    A: AnalogRead,
{
    pub fn new(enable: EN, pwm1: P1, pwm2: P2, ocm: A) -> Self {
        Self {
            enable,
            pwm1,
            pwm2,
            ocm,
        }
    }

    pub fn free(self) -> (EN, P1, P2, A) {
        (self.enable, self.pwm1, self.pwm2, self.ocm)
    }
}

impl<EN, P1, P2, A> Platform for HalPlatform<EN, P1, P2, A>
where
    EN: OutputPin,
    P1: SetDutyCycle,
    P2: SetDutyCycle,
    A: AnalogRead,
{
    type Pin = BridgePin;

    fn configure_digital_output(&mut self, pin: BridgePin) {
        trace!("hal: {:?} already an output", pin);
    }

    fn write_digital(&mut self, pin: BridgePin, level: Level) {
        if pin != BridgePin::En {
            warn!("hal: {:?} is not a digital output", pin);
            return;
        }

        let result = match level {
            Level::High => self.enable.set_high(),
            Level::Low => self.enable.set_low(),
        };
        if result.is_err() {
            warn!("hal: failed to drive EN {:?}", level);
        }
    }

    fn write_pwm(&mut self, pin: BridgePin, duty: u16) {
        let duty = duty.min(PWM_MAX);
        let ok = match pin {
            BridgePin::Pwm1 => self.pwm1.set_duty_cycle_fraction(duty, PWM_MAX).is_ok(),
            BridgePin::Pwm2 => self.pwm2.set_duty_cycle_fraction(duty, PWM_MAX).is_ok(),
            _ => {
                warn!("hal: {:?} is not a PWM output", pin);
                return;
            }
        };
        if !ok {
            warn!("hal: failed to set {:?} duty {}", pin, duty);
        }
    }

    fn read_analog(&mut self, channel: BridgePin) -> u16 {
        if channel != BridgePin::Ocm {
            warn!("hal: {:?} is not an analog input", channel);
            return 0;
        }
        self.ocm.read_sample()
    }
}

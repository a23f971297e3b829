// Driver for the TB9051FTG Single Brushed DC Motor Driver

use log::{debug, trace};
use num_traits::float::FloatCore;

use super::{Direction, Motor};
use crate::config::{MotorConfig, PinMap};
use crate::platform::{Level, Platform, PWM_MAX};

pub struct Tb9051ftg<P: Platform> {
    platform: P,
    pins: PinMap<P::Pin>,
    config: MotorConfig<P::Pin>,
    last_voltage: f32,
    enabled: bool,
    direction: Direction,
}

impl<P: Platform> Tb9051ftg<P> {
    /// Configures EN/PWM1/PWM2 as outputs and leaves the bridge disabled.
    ///
    /// The configuration is taken as is; use [`crate::DriverCreator`] to have it
    /// validated first.
    pub fn new(platform: P, pins: PinMap<P::Pin>, config: MotorConfig<P::Pin>) -> Self {
        let mut driver = Self {
            platform,
            pins,
            config,
            last_voltage: 0.0,
            enabled: false,
            direction: Direction::Coast,
        };

        driver.platform.configure_digital_output(pins.en);
        driver.platform.configure_digital_output(pins.pwm1);
        driver.platform.configure_digital_output(pins.pwm2);

        debug!(
            "tb9051ftg: en={:?} pwm1={:?} pwm2={:?} fb={:?} vin={} deadzone={}",
            pins.en,
            pins.pwm1,
            pins.pwm2,
            pins.fb,
            config.supply_voltage,
            config.deadzone
        );

        driver.disable();
        driver
    }

    /// PWM counts that `voltage` maps to outside the deadzone.
    pub fn duty_for(&self, voltage: f32) -> u16 {
        let ratio = (FloatCore::abs(voltage) / self.config.supply_voltage).clamp(0.0, 1.0);
        FloatCore::round(ratio * PWM_MAX as f32) as u16
    }

    /// Level last written to EN.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Bridge half driven by the last PWM write.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn read_current_raw(&mut self) -> u16 {
        let channel = self.config.feedback_channel.unwrap_or(self.pins.fb);
        let raw = self.platform.read_analog(channel);
        trace!("tb9051ftg: ocm channel {:?} raw {}", channel, raw);
        raw
    }

    pub fn read_current_milliamps(&mut self) -> i32 {
        let raw = self.read_current_raw();
        self.config.current_sense.sample_to_milliamps(raw)
    }

    pub fn config(&self) -> &MotorConfig<P::Pin> {
        &self.config
    }

    pub fn pins(&self) -> &PinMap<P::Pin> {
        &self.pins
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Release the platform. The bridge is left in whatever state it was in.
    pub fn free(self) -> P {
        self.platform
    }

    fn write_outputs(&mut self, forward: u16, reverse: u16) {
        self.platform.write_pwm(self.pins.pwm1, forward);
        self.platform.write_pwm(self.pins.pwm2, reverse);

        self.direction = match (forward, reverse) {
            (f, _) if f > 0 => Direction::Forward,
            (_, r) if r > 0 => Direction::Reverse,
            _ => Direction::Coast,
        };
    }

    fn set_enable_pin(&mut self, level: Level) {
        self.platform.write_digital(self.pins.en, level);
        self.enabled = level == Level::High;
    }
}

impl<P: Platform> Motor for Tb9051ftg<P> {
    /// Inside the deadzone both PWM outputs go to zero but EN keeps its level.
    /// Outside it, EN is driven high.
    fn set_voltage(&mut self, voltage: f32) {
        self.last_voltage = voltage;

        if FloatCore::abs(voltage) <= self.config.deadzone {
            trace!("tb9051ftg: {}V within deadzone", voltage);
            self.write_outputs(0, 0);
            return;
        }

        let duty = self.duty_for(voltage);
        trace!("tb9051ftg: {}V -> duty {}", voltage, duty);

        if voltage > 0.0 {
            self.write_outputs(duty, 0);
        } else {
            self.write_outputs(0, duty);
        }

        self.set_enable_pin(Level::High);
    }

    /// EN is forced high even when the last voltage sits in the deadzone.
    fn enable(&mut self) {
        debug!("tb9051ftg: enable at {}V", self.last_voltage);
        self.set_voltage(self.last_voltage);
        self.set_enable_pin(Level::High);
    }

    fn disable(&mut self) {
        debug!("tb9051ftg: disable");
        self.set_enable_pin(Level::Low);
        self.write_outputs(0, 0);
    }

    fn read_current(&mut self) -> f32 {
        let raw = self.read_current_raw();
        self.config.current_sense.sample_to_amps(raw)
    }

    fn last_voltage(&self) -> f32 {
        self.last_voltage
    }
}

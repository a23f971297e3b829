use core::fmt;

use num_traits::float::FloatCore;

use crate::motors::tb9051ftg::Tb9051ftg;
use crate::platform::Platform;

/// Pins the carrier board is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap<Pin> {
    pub en: Pin,
    pub pwm1: Pin,
    pub pwm2: Pin,
    pub fb: Pin,
}

/// Conversion from an OCM sample to motor current.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentSense {
    /// ADC reference in millivolts.
    pub full_scale_mv: f32,
    /// Samples per full scale. The carrier library divides by 4096 even though the
    /// largest sample is 4095, and readings are kept comparable with it.
    pub sample_divisor: f32,
    /// OCM sensitivity, 500 mV/A on the TB9051FTG.
    pub mv_per_amp: f32,
}

impl Default for CurrentSense {
    fn default() -> Self {
        Self {
            full_scale_mv: 3300.0,
            sample_divisor: 4096.0,
            mv_per_amp: 500.0,
        }
    }
}

impl CurrentSense {
    pub fn sample_to_millivolts(&self, raw: u16) -> f32 {
        raw as f32 / self.sample_divisor * self.full_scale_mv
    }

    pub fn sample_to_amps(&self, raw: u16) -> f32 {
        self.sample_to_millivolts(raw) / self.mv_per_amp
    }

    pub fn sample_to_milliamps(&self, raw: u16) -> i32 {
        FloatCore::round(self.sample_to_amps(raw) * 1000.0) as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorConfig<Pin> {
    /// Motor supply (VM) in volts.
    pub supply_voltage: f32,
    /// Commands with a magnitude at or below this many volts produce no output.
    pub deadzone: f32,
    /// Analog channel sampled by `read_current`. `None` samples `PinMap::fb`; set it
    /// when OCM is routed to a fixed channel independent of the pin map.
    pub feedback_channel: Option<Pin>,
    pub current_sense: CurrentSense,
}

impl<Pin> MotorConfig<Pin> {
    pub fn new(supply_voltage: f32, deadzone: f32) -> Self {
        Self {
            supply_voltage,
            deadzone,
            feedback_channel: None,
            current_sense: CurrentSense::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.supply_voltage.is_finite() || self.supply_voltage <= 0.0 {
            return Err(ConfigError::InvalidSupplyVoltage);
        }
        if !self.deadzone.is_finite() || self.deadzone < 0.0 {
            return Err(ConfigError::InvalidDeadzone);
        }
        Ok(())
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Supply voltage must be finite and greater than zero.
    InvalidSupplyVoltage,
    /// Deadzone must be finite and not negative.
    InvalidDeadzone,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSupplyVoltage => write!(f, "supply voltage must be positive"),
            ConfigError::InvalidDeadzone => write!(f, "deadzone must not be negative"),
        }
    }
}

/// Builder for a validated [`Tb9051ftg`].
pub struct DriverCreator<Pin> {
    pins: PinMap<Pin>,
    config: MotorConfig<Pin>,
}

impl<Pin: Copy> DriverCreator<Pin> {
    pub fn new(pins: PinMap<Pin>) -> Self {
        Self {
            pins,
            config: MotorConfig::new(0.0, 0.0),
        }
    }

    pub fn set_supply_voltage(self, volts: f32) -> Self {
        let mut s = self;
        s.config.supply_voltage = volts;
        s
    }

    pub fn set_deadzone(self, volts: f32) -> Self {
        let mut s = self;
        s.config.deadzone = volts;
        s
    }

    pub fn set_feedback_channel(self, channel: Pin) -> Self {
        let mut s = self;
        s.config.feedback_channel = Some(channel);
        s
    }

    pub fn set_current_sense(self, sense: CurrentSense) -> Self {
        let mut s = self;
        s.config.current_sense = sense;
        s
    }

    pub fn create<P>(self, platform: P) -> Result<Tb9051ftg<P>, ConfigError>
    where
        P: Platform<Pin = Pin>,
    {
        self.config.validate()?;
        Ok(Tb9051ftg::new(platform, self.pins, self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPlatform;
    use crate::motors::Motor;
    use crate::platform::{Level, ADC_MAX};

    const PINS: PinMap<u32> = PinMap {
        en: 2,
        pwm1: 3,
        pwm2: 4,
        fb: 15,
    };

    #[test]
    fn current_sense_uses_4096_divisor() {
        let sense = CurrentSense::default();
        assert_eq!(sense.sample_to_amps(0), 0.0);
        // 2048 / 4096 * 3300 mV = 1650 mV -> 3.3 A
        assert!((sense.sample_to_amps(2048) - 3.3).abs() < 1e-5);
        assert!((sense.sample_to_millivolts(2048) - 1650.0).abs() < 1e-3);
        // full scale never quite reaches 3300 mV
        assert!(sense.sample_to_millivolts(ADC_MAX) < 3300.0);
    }

    #[test]
    fn current_sense_milliamps() {
        let sense = CurrentSense::default();
        assert_eq!(sense.sample_to_milliamps(2048), 3300);
        assert_eq!(sense.sample_to_milliamps(0), 0);
        assert_eq!(sense.sample_to_milliamps(124), 200);
    }

    #[test]
    fn validate_rejects_bad_supply() {
        assert_eq!(
            MotorConfig::<u32>::new(0.0, 0.3).validate(),
            Err(ConfigError::InvalidSupplyVoltage)
        );
        assert_eq!(
            MotorConfig::<u32>::new(-12.0, 0.3).validate(),
            Err(ConfigError::InvalidSupplyVoltage)
        );
        assert_eq!(
            MotorConfig::<u32>::new(f32::NAN, 0.3).validate(),
            Err(ConfigError::InvalidSupplyVoltage)
        );
    }

    #[test]
    fn validate_rejects_bad_deadzone() {
        assert_eq!(
            MotorConfig::<u32>::new(12.0, -0.1).validate(),
            Err(ConfigError::InvalidDeadzone)
        );
        assert_eq!(
            MotorConfig::<u32>::new(12.0, f32::INFINITY).validate(),
            Err(ConfigError::InvalidDeadzone)
        );
        assert_eq!(MotorConfig::<u32>::new(12.0, 0.0).validate(), Ok(()));
    }

    #[test]
    fn creator_requires_supply_voltage() {
        let result = DriverCreator::new(PINS)
            .set_deadzone(0.3)
            .create(MockPlatform::new());
        assert!(matches!(result, Err(ConfigError::InvalidSupplyVoltage)));
    }

    #[test]
    fn creator_builds_disabled_driver() {
        let driver = DriverCreator::new(PINS)
            .set_supply_voltage(12.0)
            .set_deadzone(0.3)
            .set_feedback_channel(1)
            .create(MockPlatform::new())
            .unwrap();

        assert_eq!(driver.config().supply_voltage, 12.0);
        assert_eq!(driver.config().deadzone, 0.3);
        assert_eq!(driver.config().feedback_channel, Some(1));
        assert_eq!(driver.last_voltage(), 0.0);
        assert_eq!(driver.platform().level(PINS.en), Some(Level::Low));
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError::InvalidDeadzone.to_string(),
            "deadzone must not be negative"
        );
    }
}

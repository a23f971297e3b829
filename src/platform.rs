use core::fmt::Debug;

/// Full-scale PWM duty, 12 bit resolution.
pub const PWM_MAX: u16 = 4095;
/// Largest sample the analog input can return, 12 bit resolution.
pub const ADC_MAX: u16 = 4095;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Level {
    #[default]
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Pin level I/O the motor driver needs from the board.
///
/// Pins are addressed by an opaque identifier so that Arduino-style pin numbers and
/// typestate HAL pins can sit behind the same interface. None of these calls can
/// fail from the driver's point of view.
pub trait Platform {
    type Pin: Copy + PartialEq + Debug;

    fn configure_digital_output(&mut self, pin: Self::Pin);
    fn write_digital(&mut self, pin: Self::Pin, level: Level);
    /// `duty` is in `0..=PWM_MAX`.
    fn write_pwm(&mut self, pin: Self::Pin, duty: u16);
    /// Returns a sample in `0..=ADC_MAX`.
    fn read_analog(&mut self, channel: Self::Pin) -> u16;
}

impl<T: Platform + ?Sized> Platform for &mut T {
    type Pin = T::Pin;

    fn configure_digital_output(&mut self, pin: Self::Pin) {
        (**self).configure_digital_output(pin)
    }

    fn write_digital(&mut self, pin: Self::Pin, level: Level) {
        (**self).write_digital(pin, level)
    }

    fn write_pwm(&mut self, pin: Self::Pin, duty: u16) {
        (**self).write_pwm(pin, duty)
    }

    fn read_analog(&mut self, channel: Self::Pin) -> u16 {
        (**self).read_analog(channel)
    }
}

pub mod tb9051ftg;

/// Which half of the bridge is being driven.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
    #[default]
    Coast,
}

/// A voltage-commanded brushed motor.
pub trait Motor {
    /// Apply `voltage` across the motor. The sign selects the direction.
    fn set_voltage(&mut self, voltage: f32);
    /// Restore output from the last commanded voltage.
    fn enable(&mut self);
    /// Cut output without forgetting the last commanded voltage.
    fn disable(&mut self);
    /// Motor current in amps.
    fn read_current(&mut self) -> f32;
    fn last_voltage(&self) -> f32;
}

//! In-memory [`Platform`] for exercising drivers without hardware.
//!
//! Pins are Arduino-style numbers. Every call is appended to a bounded log; calls
//! past the capacity are dropped from the log but still applied to the pin state.

use heapless::{LinearMap, Vec};

use crate::platform::{Level, Platform};

const MAX_PINS: usize = 16;
const MAX_CALLS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    ConfigureOutput(u32),
    WriteDigital(u32, Level),
    WritePwm(u32, u16),
    ReadAnalog(u32),
}

#[derive(Debug, Default)]
pub struct MockPlatform {
    outputs: Vec<u32, MAX_PINS>,
    levels: LinearMap<u32, Level, MAX_PINS>,
    duties: LinearMap<u32, u16, MAX_PINS>,
    analog: LinearMap<u32, u16, MAX_PINS>,
    calls: Vec<Call, MAX_CALLS>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value returned by subsequent reads of `channel`. Unset channels read 0.
    pub fn set_analog(&mut self, channel: u32, raw: u16) {
        let _ = self.analog.insert(channel, raw);
    }

    pub fn is_output(&self, pin: u32) -> bool {
        self.outputs.contains(&pin)
    }

    /// Last level written to `pin`, if any.
    pub fn level(&self, pin: u32) -> Option<Level> {
        self.levels.get(&pin).copied()
    }

    /// Last duty written to `pin`, if any.
    pub fn duty(&self, pin: u32) -> Option<u16> {
        self.duties.get(&pin).copied()
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, call: Call) {
        let _ = self.calls.push(call);
    }
}

impl Platform for MockPlatform {
    type Pin = u32;

    fn configure_digital_output(&mut self, pin: u32) {
        if !self.outputs.contains(&pin) {
            let _ = self.outputs.push(pin);
        }
        self.record(Call::ConfigureOutput(pin));
    }

    fn write_digital(&mut self, pin: u32, level: Level) {
        let _ = self.levels.insert(pin, level);
        self.record(Call::WriteDigital(pin, level));
    }

    fn write_pwm(&mut self, pin: u32, duty: u16) {
        let _ = self.duties.insert(pin, duty);
        self.record(Call::WritePwm(pin, duty));
    }

    fn read_analog(&mut self, channel: u32) -> u16 {
        self.record(Call::ReadAnalog(channel));
        self.analog.get(&channel).copied().unwrap_or(0)
    }
}

// TB9051FTG carrier wired to the STM32F4-Discovery
//
//   EN   = PB14
//   PWM1 = PC6 (TIM3 CH1)
//   PWM2 = PC9 (TIM3 CH4)
//   OCM  = PC2 (ADC123_IN12)

use stm32f4xx_hal::{
    adc::{config::SampleTime, Adc},
    gpio::{Analog, Output, Pin, PushPull},
    pac::{ADC1, TIM3},
    timer::PwmChannel,
};

use embedded_hal_02::adc::Channel;

use tb9051ftg::{hal::AnalogRead, hal::HalPlatform, Tb9051ftg};

pub type EnablePin = Pin<'B', 14, Output<PushPull>>;
pub type ForwardPwm = PwmChannel<TIM3, 0>;
pub type ReversePwm = PwmChannel<TIM3, 3>;
pub type OcmPin = Pin<'C', 2, Analog>;

pub type DefaultCurrentSense = OcmReader<OcmPin>;
pub type BoardPlatform = HalPlatform<EnablePin, ForwardPwm, ReversePwm, DefaultCurrentSense>;
pub type BoardMotor = Tb9051ftg<BoardPlatform>;

/// Single-channel one-shot conversions of the OCM pin.
pub struct OcmReader<C: Channel<ADC1, ID = u8>> {
    adc: Adc<ADC1>,
    pin: C,
}

impl<C: Channel<ADC1, ID = u8>> OcmReader<C> {
    pub fn new(adc: Adc<ADC1>, pin: C) -> Self {
        Self { adc, pin }
    }

    pub fn free(self) -> (Adc<ADC1>, C) {
        (self.adc, self.pin)
    }
}

impl<C: Channel<ADC1, ID = u8>> AnalogRead for OcmReader<C> {
    fn read_sample(&mut self) -> u16 {
        self.adc.convert(&self.pin, SampleTime::Cycles_480)
    }
}

#![no_std]

use stm32f4xx_hal::{
    adc::{config::AdcConfig, Adc},
    pac::{CorePeripherals, Peripherals},
    prelude::*,
    timer::{SysDelay, Timer3},
};

use tb9051ftg::{
    hal::{HalPlatform, BRIDGE_PINS},
    ConfigError, DriverCreator,
};

pub mod logging;
pub mod motor;

use motor::{BoardMotor, OcmReader};

pub const PWM_FREQUENCY: fugit::HertzU32 = fugit::HertzU32::kHz(20);

pub struct MotorHardware {
    pub delay: SysDelay,
    pub motor: BoardMotor,
}

impl MotorHardware {
    /// Bring up clocks, TIM3 PWM and ADC1, and hand back a disabled motor.
    pub fn init(
        pac: Peripherals,
        core: CorePeripherals,
        supply_voltage: f32,
        deadzone: f32,
    ) -> Result<Self, ConfigError> {
        let rcc = pac.RCC.constrain();
        let clocks = rcc.cfgr.use_hse(8.MHz()).sysclk(168.MHz()).freeze();
        let delay = core.SYST.delay(&clocks);

        let gpiob = pac.GPIOB.split();
        let gpioc = pac.GPIOC.split();

        let enable = gpiob.pb14.into_push_pull_output();

        let tim3 = Timer3::new(pac.TIM3, &clocks);
        let tim3_pins = (gpioc.pc6.into_alternate(), gpioc.pc9.into_alternate());
        let (mut pwm1, mut pwm2) = tim3.pwm_hz(tim3_pins, PWM_FREQUENCY).split();
        pwm1.enable();
        pwm2.enable();

        let ocm_pin = gpioc.pc2.into_analog();
        let adc1 = Adc::adc1(pac.ADC1, true, AdcConfig::default());
        let ocm = OcmReader::new(adc1, ocm_pin);

        let platform = HalPlatform::new(enable, pwm1, pwm2, ocm);
        let motor = DriverCreator::new(BRIDGE_PINS)
            .set_supply_voltage(supply_voltage)
            .set_deadzone(deadzone)
            .create(platform)?;

        Ok(Self { delay, motor })
    }
}

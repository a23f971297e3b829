#![no_main]
#![no_std]

use cortex_m_rt::entry;
use log::{error, info, Level};
use panic_halt as _;
use stm32f4xx_hal::{pac, prelude::*};

use tb9051ftg::Motor;
use tb9051ftg_hardware::{logging, MotorHardware};

const SUPPLY_VOLTAGE: f32 = 12.0;
const DEADZONE: f32 = 0.3;
const STEP: f32 = 0.5;

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().expect("Failed to get device periph");
    let cp = cortex_m::peripheral::Peripherals::take().expect("Failed to get core periph");

    if logging::init(Level::Debug).is_err() {
        defmt::error!("logger already set");
    }

    let MotorHardware { mut delay, mut motor } =
        match MotorHardware::init(dp, cp, SUPPLY_VOLTAGE, DEADZONE) {
            Ok(hw) => hw,
            Err(e) => {
                error!("bad motor config: {}", e);
                panic!();
            }
        };

    motor.enable();

    // Ramp 0 -> +Vin -> -Vin -> 0, reporting current at each step
    let mut voltage = 0.0_f32;
    let mut step = STEP;
    loop {
        motor.set_voltage(voltage);
        delay.delay_ms(200);

        info!(
            "{}V {:?} {}mA",
            motor.last_voltage(),
            motor.direction(),
            motor.read_current_milliamps()
        );

        voltage += step;
        if voltage >= SUPPLY_VOLTAGE || voltage <= -SUPPLY_VOLTAGE {
            step = -step;
        }

        if motor.read_current() > 5.0 {
            error!("overcurrent, stopping");
            motor.disable();
            loop {
                delay.delay_ms(1000);
            }
        }
    }
}

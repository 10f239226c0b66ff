//! [`MotorGroup`] for V5 smart motors.
//!
//! Any fixed-size array of [`Motor`]s is a motor group. Every motor in the
//! array gets the same command; a motor that fails to take it is logged and
//! skipped so the rest of the side keeps driving.

use log::warn;
use vexide::smart::motor::{BrakeMode as VexBrakeMode, Motor};

use crate::drivetrain::{BrakeMode, MotorGroup};

/// Stall current of a V5 smart motor, in amps. Torque scales with current.
const V5_MAX_CURRENT: f64 = 2.5;

impl From<BrakeMode> for VexBrakeMode {
    fn from(mode: BrakeMode) -> Self {
        match mode {
            BrakeMode::Coast => Self::Coast,
            BrakeMode::Brake => Self::Brake,
            BrakeMode::Hold => Self::Hold,
        }
    }
}

impl<const N: usize> MotorGroup for [Motor; N] {
    fn set_voltage(&mut self, volts: f64) {
        for motor in self.iter_mut() {
            motor.set_voltage(volts).unwrap_or_else(|e| {
                warn!("Motor Set Voltage Error: {}", e);
            });
        }
    }

    fn set_percent(&mut self, percent: f64) {
        for motor in self.iter_mut() {
            let max_rpm = match motor.gearset() {
                Ok(gearset) => gearset.max_rpm(),
                Err(e) => {
                    warn!("Motor Gearset Error: {}", e);
                    continue;
                }
            };
            let rpm = (percent / 100.0 * max_rpm).round() as i32;
            motor.set_velocity(rpm).unwrap_or_else(|e| {
                warn!("Motor Set Velocity Error: {}", e);
            });
        }
    }

    fn brake(&mut self, mode: BrakeMode) {
        for motor in self.iter_mut() {
            motor.brake(mode.into()).unwrap_or_else(|e| {
                warn!("Motor Brake Error: {}", e);
            });
        }
    }

    fn set_torque_limit(&mut self, percent: f64) {
        let amps = V5_MAX_CURRENT * percent / 100.0;
        for motor in self.iter_mut() {
            motor.set_current_limit(amps).unwrap_or_else(|e| {
                warn!("Motor Set Current Limit Error: {}", e);
            });
        }
    }
}

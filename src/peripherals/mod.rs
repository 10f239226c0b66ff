//! Vexide bindings for the V5 Brain.
//!
//! Implements the crate's hardware seams on top of real V5 devices:
//!
//! - **Motors**: [`MotorGroup`](crate::drivetrain::MotorGroup) for arrays of
//!   V5 smart motors.
//! - **Controller**: [`InputSource`](crate::opcontrol::controller::InputSource)
//!   for a snapshot of the V5 controller.
//!
//! # Example
//!
//! ```ignore
//! use tiller::{drivetrain::Differential, peripherals::controller::{ControllerButton, ControllerInput}};
//! use vexide::prelude::*;
//!
//! let mut drivetrain = Differential::new(
//!     [
//!         Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
//!         Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
//!     ],
//!     [
//!         Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
//!         Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
//!     ],
//! );
//! let input = ControllerInput::read(&controller, ControllerButton::ButtonB);
//! teleop.step(&input, &mut drivetrain, user_uptime());
//! ```

/// Controller input sampling.
///
/// Provides [`ControllerInput`](controller::ControllerInput), a per-tick
/// snapshot of the controller's sticks and drive-inversion button.
pub mod controller;

/// Smart motor groups.
pub mod motors;

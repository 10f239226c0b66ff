//! Operator control for driver control periods.
//!
//! This module holds the drive signal pipeline: everything between the
//! controller sticks and the drivetrain motors.
//!
//! # Pipeline
//!
//! 1. Sample the drive axis, turn axis and drive-inversion button.
//! 2. Apply the deadzone to both axes (intermediate and advanced).
//! 3. Invert the drive axis if the drive is flipped (advanced).
//! 4. Shape both axes with response curves (advanced).
//! 5. Mix into left/right sides and clamp to the voltage ceiling.
//! 6. Coast any side whose command is exactly zero.
//!
//! # Example
//!
//! ```ignore
//! use tiller::opcontrol::{controller::ControllerSample, teleop::Teleop};
//!
//! let mut teleop = Teleop::new(DriveConfig::default());
//! let output = teleop.tick(ControllerSample::new(80, -20, false), now);
//! drivetrain.apply(output.command);
//! ```

/// Controller sampling.
///
/// Provides the [`InputSource`](controller::InputSource) trait and the
/// per-tick [`ControllerSample`](controller::ControllerSample).
pub mod controller;

/// The beginner, intermediate and advanced drive policies.
pub mod policy;

/// Deadzone, clamp, response curve and arcade mixing.
pub mod shaping;

/// The per-tick driver control state machine.
pub mod teleop;

/// Debounced drive-inversion toggle.
pub mod toggle;

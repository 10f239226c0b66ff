//! # Tiller
//!
//! Tiller is a teleoperated drivetrain controller for two-motor-group
//! differential-drive VEX V5 robots, built on top of [Vexide](https://vexide.dev).
//! It turns two joystick axes into left/right motor commands using one of
//! three drive policies of increasing sophistication:
//!
//! - **Beginner**: Either drive straight or pivot, whichever stick dominates.
//! - **Intermediate**: Deadzoned arcade mixing with a voltage ceiling.
//! - **Advanced**: Arcade mixing with exponential response curves and a
//!   button-toggled drive inversion for swapping the robot's front and back.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tiller::{config::DriveConfig, drivetrain::Differential, opcontrol::teleop::Teleop};
//! use vexide::prelude::*;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     let mut drivetrain = Differential::new(
//!         [
//!             Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
//!             Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
//!         ],
//!         [
//!             Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
//!             Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
//!         ],
//!     );
//!     let mut teleop = Teleop::new(DriveConfig::default());
//!     drivetrain.configure(teleop.config());
//!     // In your control loop:
//!     // teleop.step(&input, &mut drivetrain, user_uptime());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`opcontrol`]: The drive signal pipeline, drive policies and the
//!   debounced drive-inversion toggle.
//! - [`drivetrain`]: Motor commands and the differential drivetrain they drive.
//! - [`config`]: Tunables loaded from a TOML file on the SD card.
//! - [`fs`]: Filesystem utilities including logging.
//! - [`sim`]: Recording motor groups and scripted replays for running the
//!   pipeline without a brain.

/// Drive configuration.
///
/// Holds the [`DriveConfig`](config::DriveConfig) tunables: which drive
/// policy runs, deadzone, voltage ceiling, curve exponents and timings.
pub mod config;

/// Differential drivetrain control module.
///
/// Provides the [`Differential`](drivetrain::Differential) struct for driving
/// a left and a right motor group, and the [`MotorGroup`](drivetrain::MotorGroup)
/// trait the hardware binding implements.
pub mod drivetrain;

/// Error types.
pub mod error;

/// Filesystem utilities module.
///
/// Contains logging functionality for recording robot telemetry and debug
/// information to files on the V5 Brain's SD card.
pub mod fs;

/// Operator control module.
///
/// Maps controller sticks and buttons to drivetrain commands during the
/// driver control period.
pub mod opcontrol;

/// Vexide bindings for the V5 Brain.
///
/// Only available when compiling for the V5 itself.
#[cfg(target_vendor = "vex")]
pub mod peripherals;

/// Pipeline replay without hardware.
pub mod sim;

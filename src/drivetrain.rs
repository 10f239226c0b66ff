//! Differential drivetrain control.
//!
//! This module provides the `Differential` struct for controlling robots with
//! separate left and right motor groups, commonly known as a "tank drive" or
//! "differential drive" configuration.
//!
//! The drivetrain is generic over the [`MotorGroup`] trait so the same code
//! path drives real V5 motors on the brain and recording motor groups in
//! tests and host replays.
//!
//! # Example
//!
//! ```ignore
//! use tiller::drivetrain::{Differential, DriveCommand, MotorCommand};
//!
//! let mut drivetrain = Differential::new(left_motors, right_motors);
//! drivetrain.apply(DriveCommand::new(
//!     MotorCommand::Voltage(6.0),
//!     MotorCommand::Voltage(-6.0),
//! ));
//! ```

use log::debug;

use crate::config::DriveConfig;

/// How a motor group behaves when it is stopped.
///
/// - [`BrakeMode::Coast`]: Motors spin freely.
/// - [`BrakeMode::Brake`]: Motors actively resist rotation.
/// - [`BrakeMode::Hold`]: Motors actively hold their position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrakeMode {
    #[default]
    Coast,
    Brake,
    Hold,
}

/// A single command for one motor group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotorCommand {
    /// Spin at a voltage, in volts.
    Voltage(f64),
    /// Spin at a percentage of the motor's maximum velocity.
    Percent(f64),
    /// Stop using the given brake mode.
    Stop(BrakeMode),
}

impl MotorCommand {
    /// Stop and let the wheels spin freely.
    pub const COAST: Self = Self::Stop(BrakeMode::Coast);

    /// Returns a voltage command, or [`MotorCommand::COAST`] when the voltage
    /// is exactly zero.
    ///
    /// Spinning at zero volts does nothing useful, so a zero command relaxes
    /// the motor instead.
    pub fn voltage_or_coast(volts: f64) -> Self {
        if volts == 0.0 {
            Self::COAST
        } else {
            Self::Voltage(volts)
        }
    }

    /// Signed output of this command in its own unit. Stops are zero.
    pub const fn value(&self) -> f64 {
        match *self {
            Self::Voltage(v) | Self::Percent(v) => v,
            Self::Stop(_) => 0.0,
        }
    }

    /// Returns `true` if this command stops the motor.
    pub const fn is_stop(&self) -> bool { matches!(self, Self::Stop(_)) }
}

/// A pair of commands, one per side of the drivetrain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveCommand {
    pub left:  MotorCommand,
    pub right: MotorCommand,
}

impl DriveCommand {
    /// Both sides coasting.
    pub const COAST: Self = Self::new(MotorCommand::COAST, MotorCommand::COAST);

    pub const fn new(left: MotorCommand, right: MotorCommand) -> Self { Self { left, right } }
}

/// A group of motors on one side of the drivetrain that move together.
///
/// Implementations are expected to report hardware failures through the log
/// and carry on; a failed write is retried on the next tick anyway.
pub trait MotorGroup {
    /// Spins every motor in the group at `volts`.
    fn set_voltage(&mut self, volts: f64);

    /// Spins every motor in the group at `percent` of its maximum velocity.
    fn set_percent(&mut self, percent: f64);

    /// Stops every motor in the group using `mode`.
    fn brake(&mut self, mode: BrakeMode);

    /// Limits the torque of every motor in the group to `percent` of its maximum.
    fn set_torque_limit(&mut self, percent: f64);

    /// Dispatches a [`MotorCommand`] to the matching method.
    fn command(&mut self, command: MotorCommand) {
        match command {
            MotorCommand::Voltage(volts) => self.set_voltage(volts),
            MotorCommand::Percent(percent) => self.set_percent(percent),
            MotorCommand::Stop(mode) => self.brake(mode),
        }
    }
}

/// A differential drivetrain controller.
///
/// This struct owns a robot's left and right motor groups and applies
/// [`DriveCommand`]s to them. The groups are public so other systems can
/// reach the motors directly when they need to.
///
/// # Motor Configuration
///
/// Motors on opposite sides of the drivetrain typically need to spin in
/// opposite directions to move the robot forward. Configure motor directions
/// appropriately when creating the motors; commands here are always
/// "forward positive" for both sides.
#[derive(Debug, Clone)]
pub struct Differential<L, R> {
    /// The left motor group.
    pub left:  L,
    /// The right motor group.
    pub right: R,
}

impl<L: MotorGroup, R: MotorGroup> Differential<L, R> {
    /// Creates a new drivetrain with the provided left/right motor groups.
    pub const fn new(left: L, right: R) -> Self { Self { left, right } }

    /// Sends one command to each side of the drivetrain.
    pub fn apply(&mut self, command: DriveCommand) {
        self.left.command(command.left);
        self.right.command(command.right);
    }

    /// Sets the brake mode for all motors in the drivetrain.
    ///
    /// This stops the motors, so call it before driving rather than during.
    pub fn set_brakemode(&mut self, mode: BrakeMode) {
        self.left.brake(mode);
        self.right.brake(mode);
    }

    /// Limits the torque of all motors in the drivetrain to `percent` of
    /// their maximum.
    pub fn set_torque_limit(&mut self, percent: f64) {
        let percent = percent.clamp(0.0, 100.0);
        self.left.set_torque_limit(percent);
        self.right.set_torque_limit(percent);
    }

    /// Puts the drivetrain in its driver-control starting state: coasting,
    /// with the configured torque limit.
    pub fn configure(&mut self, config: &DriveConfig) {
        debug!(
            "Configuring drivetrain: coast, {}% torque",
            config.torque_limit
        );
        self.set_brakemode(BrakeMode::Coast);
        self.set_torque_limit(config.torque_limit);
    }
}

//! Running the drive pipeline without a brain.
//!
//! [`LoggedMotorGroup`] stands in for a real motor group: it remembers every
//! command it was given and logs it. [`replay`] feeds a scripted sequence of
//! controller samples through a [`Teleop`] at its configured tick rate.

use std::time::Duration;

use log::{debug, info};

use crate::{
    drivetrain::{BrakeMode, Differential, MotorCommand, MotorGroup},
    opcontrol::{
        controller::ControllerSample,
        teleop::{Teleop, TickOutput},
    },
};

/// A motor group that records what it was told to do.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedMotorGroup {
    name:         &'static str,
    history:      Vec<MotorCommand>,
    torque_limit: f64,
}

impl LoggedMotorGroup {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            history: Vec::new(),
            torque_limit: 100.0,
        }
    }

    /// Every command received, oldest first.
    pub fn history(&self) -> &[MotorCommand] { &self.history }

    /// The most recent command, if any.
    pub fn last(&self) -> Option<MotorCommand> { self.history.last().copied() }

    pub const fn torque_limit(&self) -> f64 { self.torque_limit }

    fn record(&mut self, command: MotorCommand) {
        debug!("{}: {:?}", self.name, command);
        self.history.push(command);
    }
}

impl MotorGroup for LoggedMotorGroup {
    fn set_voltage(&mut self, volts: f64) { self.record(MotorCommand::Voltage(volts)); }

    fn set_percent(&mut self, percent: f64) { self.record(MotorCommand::Percent(percent)); }

    fn brake(&mut self, mode: BrakeMode) { self.record(MotorCommand::Stop(mode)); }

    fn set_torque_limit(&mut self, percent: f64) { self.torque_limit = percent; }
}

/// One step of a scripted drive: a controller sample held for some ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Maneuver {
    pub label:  &'static str,
    pub sample: ControllerSample,
    pub ticks:  u32,
}

impl Maneuver {
    pub const fn new(label: &'static str, sample: ControllerSample, ticks: u32) -> Self {
        Self {
            label,
            sample,
            ticks,
        }
    }
}

/// A short drive that exercises every part of the pipeline: idle drift,
/// straight driving, turning, arcing, and a drive-inversion press.
pub fn demo_script() -> Vec<Maneuver> {
    vec![
        Maneuver::new("idle drift", ControllerSample::new(8, -11, false), 4),
        Maneuver::new("half forward", ControllerSample::new(50, 0, false), 4),
        Maneuver::new("full forward", ControllerSample::new(100, 0, false), 4),
        Maneuver::new("pivot right", ControllerSample::new(0, 60, false), 4),
        Maneuver::new("arc left", ControllerSample::new(80, -40, false), 4),
        Maneuver::new("flip drive", ControllerSample::new(0, 0, true), 2),
        Maneuver::new("release", ControllerSample::new(0, 0, false), 2),
        Maneuver::new("half forward, flipped", ControllerSample::new(50, 0, false), 4),
        Maneuver::new("stop", ControllerSample::new(0, 0, false), 2),
    ]
}

/// Replays `script` through `teleop`, applying each tick to `drivetrain`.
///
/// Simulated uptime starts at `start` and advances by the tick interval, so
/// debounce behaves exactly as it would on the robot.
pub fn replay<L: MotorGroup, R: MotorGroup>(
    teleop: &mut Teleop,
    drivetrain: &mut Differential<L, R>,
    script: &[Maneuver],
    start: Duration,
) -> Vec<TickOutput> {
    let mut now = start;
    let mut outputs = Vec::new();

    for maneuver in script {
        info!("{} for {} ticks", maneuver.label, maneuver.ticks);
        for _ in 0..maneuver.ticks {
            let output = teleop.step(&maneuver.sample, drivetrain, now);
            if output.toggled {
                info!("Drive inverted at {:?}", now);
            }
            outputs.push(output);
            now += teleop.tick_interval();
        }
    }
    outputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::DriveConfig,
        opcontrol::{policy::DrivePolicy, toggle::DriveMode},
    };

    fn drivetrain() -> Differential<LoggedMotorGroup, LoggedMotorGroup> {
        Differential::new(LoggedMotorGroup::new("left"), LoggedMotorGroup::new("right"))
    }

    #[test]
    fn logged_group_records_in_order() {
        let mut group = LoggedMotorGroup::new("left");
        assert_eq!(group.last(), None);
        group.set_voltage(4.0);
        group.brake(BrakeMode::Hold);
        group.set_percent(-20.0);
        assert_eq!(
            group.history(),
            &[
                MotorCommand::Voltage(4.0),
                MotorCommand::Stop(BrakeMode::Hold),
                MotorCommand::Percent(-20.0),
            ]
        );
    }

    #[test]
    fn demo_replay_flips_once() {
        let mut teleop = Teleop::new(DriveConfig::default());
        let mut dt = drivetrain();
        let script = demo_script();
        let outputs = replay(&mut teleop, &mut dt, &script, Duration::ZERO);

        let total: u32 = script.iter().map(|m| m.ticks).sum();
        assert_eq!(outputs.len(), total as usize);
        assert_eq!(dt.left.history().len(), total as usize);
        assert_eq!(outputs.iter().filter(|o| o.toggled).count(), 1);
        assert_eq!(teleop.mode(), DriveMode::Flipped);

        // idle drift never reaches the motors
        assert!(outputs[..4].iter().all(|o| o.command.left.is_stop()));
        // driving forward while flipped goes backward
        let flipped_forward = outputs[outputs.len() - 3];
        assert!(flipped_forward.command.left.value() < 0.0);
        assert!(flipped_forward.rumble);
    }

    #[test]
    fn replay_under_beginner_uses_percent() {
        let mut teleop = Teleop::new(DriveConfig {
            policy: DrivePolicy::Beginner,
            ..DriveConfig::default()
        });
        let mut dt = drivetrain();
        let script = [Maneuver::new("pivot", ControllerSample::new(10, 50, false), 1)];
        replay(&mut teleop, &mut dt, &script, Duration::ZERO);
        assert_eq!(dt.left.last(), Some(MotorCommand::Percent(50.0)));
        assert_eq!(dt.right.last(), Some(MotorCommand::Percent(-50.0)));
    }
}

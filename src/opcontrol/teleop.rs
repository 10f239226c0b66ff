//! The driver control tick.
//!
//! [`Teleop`] owns the drive configuration and the drive-inversion state and
//! turns one [`ControllerSample`] into one [`DriveCommand`] per tick. It does
//! no waiting of its own: the caller decides the cadence and passes in the
//! uptime of each tick.
//!
//! # Example
//!
//! ```ignore
//! let mut teleop = Teleop::new(DriveConfig::load_or_default(CONFIG_PATH));
//! drivetrain.configure(teleop.config());
//! loop {
//!     let output = teleop.step(&input, &mut drivetrain, user_uptime());
//!     if output.rumble {
//!         // tell the driver the drive is inverted
//!     }
//!     sleep(teleop.tick_interval()).await;
//! }
//! ```

use std::time::Duration;

use log::info;

use super::{
    controller::{ControllerSample, InputSource},
    toggle::{DebouncedToggle, DriveMode},
};
use crate::{
    config::DriveConfig,
    drivetrain::{Differential, DriveCommand, MotorGroup},
};

/// What one tick decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    /// Commands for both sides of the drivetrain.
    pub command: DriveCommand,
    /// Drive mode after this tick.
    pub mode:    DriveMode,
    /// `true` if this tick toggled the drive mode.
    pub toggled: bool,
    /// `true` if the controller should rumble this tick.
    pub rumble:  bool,
}

/// Driver control state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct Teleop {
    config: DriveConfig,
    toggle: DebouncedToggle,
}

impl Teleop {
    /// Creates a new tick function in [`DriveMode::Normal`].
    pub fn new(config: DriveConfig) -> Self {
        let toggle = DebouncedToggle::new(config.debounce());
        Self { config, toggle }
    }

    pub const fn config(&self) -> &DriveConfig { &self.config }

    pub const fn mode(&self) -> DriveMode { self.toggle.mode() }

    /// How long the caller should wait between ticks.
    pub const fn tick_interval(&self) -> Duration { self.config.tick_interval() }

    /// Rumble pattern to send while [`TickOutput::rumble`] is set.
    pub fn rumble_pattern(&self) -> &str { &self.config.rumble_pattern }

    /// Runs one tick on `sample`, taken at uptime `now`.
    ///
    /// The command is computed with the mode the tick started in; a toggle
    /// seen in `sample` takes effect from the next tick. Only the advanced
    /// policy looks at the toggle button.
    pub fn tick(&mut self, sample: ControllerSample, now: Duration) -> TickOutput {
        let policy = self.config.policy;
        let command = policy.compute(sample.input, self.toggle.mode(), &self.config);

        let toggled = policy.uses_mode() && self.toggle.update(sample.toggle_pressing, now);
        let mode = self.toggle.mode();
        if toggled {
            info!("Drive direction is now {}", mode);
        }

        TickOutput {
            command,
            mode,
            toggled,
            rumble: mode.is_flipped(),
        }
    }

    /// Samples `input`, runs one tick, and applies the result to `drivetrain`.
    pub fn step<I, L, R>(
        &mut self,
        input: &I,
        drivetrain: &mut Differential<L, R>,
        now: Duration,
    ) -> TickOutput
    where
        I: InputSource + ?Sized,
        L: MotorGroup,
        R: MotorGroup,
    {
        let output = self.tick(input.sample(), now);
        drivetrain.apply(output.command);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        drivetrain::MotorCommand,
        opcontrol::policy::{DrivePolicy, advanced},
        sim::LoggedMotorGroup,
    };

    fn ms(ms: u64) -> Duration { Duration::from_millis(ms) }

    fn teleop(policy: DrivePolicy) -> Teleop {
        Teleop::new(DriveConfig {
            policy,
            ..DriveConfig::default()
        })
    }

    #[test]
    fn starts_normal_without_rumble() {
        let mut t = teleop(DrivePolicy::Advanced);
        let out = t.tick(ControllerSample::new(0, 0, false), ms(0));
        assert_eq!(out.mode, DriveMode::Normal);
        assert!(!out.rumble);
        assert_eq!(out.command, DriveCommand::COAST);
    }

    #[test]
    fn toggle_takes_effect_next_tick() {
        let mut t = teleop(DrivePolicy::Advanced);
        let config = DriveConfig::default();
        let pressed = ControllerSample::new(100, 0, true);

        let first = t.tick(pressed, ms(0));
        assert!(first.toggled);
        assert!(first.rumble);
        assert_eq!(
            first.command,
            advanced(pressed.input, DriveMode::Normal, &config)
        );

        let second = t.tick(ControllerSample::new(100, 0, false), ms(50));
        assert!(!second.toggled);
        assert!(second.rumble);
        assert_eq!(
            second.command,
            DriveCommand::new(MotorCommand::Voltage(-12.8), MotorCommand::Voltage(-12.8))
        );
    }

    #[test]
    fn rumbles_every_tick_while_flipped() {
        let mut t = teleop(DrivePolicy::Advanced);
        t.tick(ControllerSample::new(0, 0, true), ms(0));
        for i in 1..20 {
            assert!(t.tick(ControllerSample::new(0, 0, false), ms(i * 50)).rumble);
        }
        assert!(t.tick(ControllerSample::new(0, 0, true), ms(1000)).toggled);
        assert!(!t.tick(ControllerSample::new(0, 0, false), ms(1050)).rumble);
    }

    #[test]
    fn double_press_within_debounce_is_one_toggle() {
        let mut t = teleop(DrivePolicy::Advanced);
        assert!(t.tick(ControllerSample::new(0, 0, true), ms(0)).toggled);
        assert!(!t.tick(ControllerSample::new(0, 0, false), ms(30)).toggled);
        assert!(!t.tick(ControllerSample::new(0, 0, true), ms(60)).toggled);
        assert_eq!(t.mode(), DriveMode::Flipped);
    }

    #[test]
    fn other_policies_ignore_toggle() {
        for policy in [DrivePolicy::Beginner, DrivePolicy::Intermediate] {
            let mut t = teleop(policy);
            let out = t.tick(ControllerSample::new(40, 0, true), ms(0));
            assert!(!out.toggled);
            assert!(!out.rumble);
            assert_eq!(t.mode(), DriveMode::Normal);
        }
    }

    #[test]
    fn identical_state_and_input_give_identical_output() {
        let mut a = teleop(DrivePolicy::Advanced);
        a.tick(ControllerSample::new(0, 0, true), ms(0));
        let mut b = a.clone();
        let sample = ControllerSample::new(-55, 70, false);
        assert_eq!(a.tick(sample, ms(500)), b.tick(sample, ms(500)));
        assert_eq!(a, b);
    }

    #[test]
    fn step_applies_command() {
        let mut t = teleop(DrivePolicy::Intermediate);
        let mut dt = Differential::new(LoggedMotorGroup::new("left"), LoggedMotorGroup::new("right"));

        let out = t.step(&ControllerSample::new(0, 30, false), &mut dt, ms(0));
        assert_eq!(dt.left.last(), Some(out.command.left));
        assert_eq!(dt.left.last(), Some(MotorCommand::Voltage(-12.8)));
        assert_eq!(dt.right.last(), Some(MotorCommand::Voltage(12.8)));

        t.step(&ControllerSample::new(5, 5, false), &mut dt, ms(50));
        assert_eq!(dt.left.last(), Some(MotorCommand::COAST));
        assert_eq!(dt.right.last(), Some(MotorCommand::COAST));
    }
}

//! Drive policies.
//!
//! Three ways of turning a [`RawInput`] into a [`DriveCommand`], from the
//! simplest thing that drives to what competition drivers actually want.
//!
//! # Beginner
//!
//! Whichever stick is deflected further wins. If it's the turn stick the
//! robot pivots in place, otherwise it drives straight. Output is a velocity
//! percentage with no deadzone. The robot can't drive and turn at once.
//!
//! # Intermediate
//!
//! Arcade drive. Both axes go through the deadzone, are mixed into
//! `left = drive - turn` and `right = drive + turn`, and each side is clamped
//! to the voltage ceiling. A side with nothing to do coasts.
//!
//! # Advanced
//!
//! Intermediate, plus exponential response curves (square for drive, a
//! steeper 3.5 power for turn) and the drive-inversion mode. The turn axis
//! is negated before shaping.

use serde::{Deserialize, Serialize};

use super::{
    controller::RawInput,
    shaping::{AXIS_RANGE, apply_deadzone, arcade_mix, clamp_voltage, response_curve},
    toggle::DriveMode,
};
use crate::{
    config::DriveConfig,
    drivetrain::{DriveCommand, MotorCommand},
};

/// Which drive policy is in charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrivePolicy {
    Beginner,
    Intermediate,
    #[default]
    Advanced,
}

impl DrivePolicy {
    /// Computes this tick's command.
    ///
    /// `mode` is ignored by every policy except [`DrivePolicy::Advanced`].
    pub fn compute(self, input: RawInput, mode: DriveMode, config: &DriveConfig) -> DriveCommand {
        match self {
            Self::Beginner => beginner(input),
            Self::Intermediate => intermediate(input, config),
            Self::Advanced => advanced(input, mode, config),
        }
    }

    /// Returns `true` if the policy reacts to the drive-inversion toggle.
    pub const fn uses_mode(self) -> bool { matches!(self, Self::Advanced) }
}

/// Drive straight or pivot, whichever the driver is asking for more.
pub fn beginner(input: RawInput) -> DriveCommand {
    let range = f64::from(AXIS_RANGE);
    let drive = f64::from(input.drive).clamp(-range, range);
    let turn = f64::from(input.turn).clamp(-range, range);

    if input.turn.abs() > input.drive.abs() {
        DriveCommand::new(MotorCommand::Percent(turn), MotorCommand::Percent(-turn))
    } else {
        DriveCommand::new(MotorCommand::Percent(drive), MotorCommand::Percent(drive))
    }
}

/// Deadzoned arcade drive in volts.
pub fn intermediate(input: RawInput, config: &DriveConfig) -> DriveCommand {
    let drive = apply_deadzone(input.drive, config.deadzone);
    let turn = apply_deadzone(input.turn, config.deadzone);

    let (left, right) = arcade_mix(f64::from(drive), f64::from(turn));
    to_voltages(left, right, config.max_voltage)
}

/// Deadzoned, curved arcade drive with drive inversion.
pub fn advanced(input: RawInput, mode: DriveMode, config: &DriveConfig) -> DriveCommand {
    let mut drive = apply_deadzone(input.drive, config.deadzone);
    let turn = apply_deadzone(input.turn, config.deadzone);

    if mode.is_flipped() {
        drive = -drive;
    }

    let drive = response_curve(f64::from(drive), config.drive_exponent, config.max_voltage);
    let turn = response_curve(-f64::from(turn), config.turn_exponent, config.max_voltage);

    let (left, right) = arcade_mix(drive, turn);
    to_voltages(left, right, config.max_voltage)
}

fn to_voltages(left: f64, right: f64, max: f64) -> DriveCommand {
    DriveCommand::new(
        MotorCommand::voltage_or_coast(clamp_voltage(left, max)),
        MotorCommand::voltage_or_coast(clamp_voltage(right, max)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcontrol::shaping::MAX_VOLTAGE;

    fn input(drive: i32, turn: i32) -> RawInput { RawInput::new(drive, turn) }

    fn all_inputs() -> impl Iterator<Item = RawInput> {
        (-100..=100).flat_map(|d| (-100..=100).map(move |t| input(d, t)))
    }

    fn in_ceiling(cmd: MotorCommand) -> bool {
        match cmd {
            MotorCommand::Voltage(v) => v.abs() <= MAX_VOLTAGE && v != 0.0,
            MotorCommand::Stop(_) => true,
            MotorCommand::Percent(_) => false,
        }
    }

    #[test]
    fn beginner_drive_dominates() {
        assert_eq!(
            beginner(input(50, 10)),
            DriveCommand::new(MotorCommand::Percent(50.0), MotorCommand::Percent(50.0))
        );
    }

    #[test]
    fn beginner_turn_dominates() {
        assert_eq!(
            beginner(input(10, 50)),
            DriveCommand::new(MotorCommand::Percent(50.0), MotorCommand::Percent(-50.0))
        );
        assert_eq!(
            beginner(input(10, -50)),
            DriveCommand::new(MotorCommand::Percent(-50.0), MotorCommand::Percent(50.0))
        );
    }

    #[test]
    fn beginner_has_no_deadzone() {
        assert_eq!(
            beginner(input(3, 1)),
            DriveCommand::new(MotorCommand::Percent(3.0), MotorCommand::Percent(3.0))
        );
    }

    #[test]
    fn intermediate_straight_is_clamped_and_driven() {
        let cmd = intermediate(input(40, 0), &DriveConfig::default());
        assert_eq!(
            cmd,
            DriveCommand::new(MotorCommand::Voltage(12.8), MotorCommand::Voltage(12.8))
        );
    }

    #[test]
    fn intermediate_idle_coasts() {
        let config = DriveConfig::default();
        assert_eq!(intermediate(input(0, 0), &config), DriveCommand::COAST);
        // drift inside the deadzone is idle too
        assert_eq!(intermediate(input(14, -9), &config), DriveCommand::COAST);
    }

    #[test]
    fn intermediate_coasts_only_the_idle_side() {
        let cmd = intermediate(input(20, 20), &DriveConfig::default());
        assert_eq!(cmd.left, MotorCommand::COAST);
        assert_eq!(cmd.right, MotorCommand::Voltage(12.8));
    }

    #[test]
    fn outputs_stay_within_ceiling() {
        let config = DriveConfig::default();
        for raw in all_inputs() {
            for cmd in [
                intermediate(raw, &config),
                advanced(raw, DriveMode::Normal, &config),
                advanced(raw, DriveMode::Flipped, &config),
            ] {
                assert!(in_ceiling(cmd.left), "{raw:?} -> {cmd:?}");
                assert!(in_ceiling(cmd.right), "{raw:?} -> {cmd:?}");
            }
        }
    }

    #[test]
    fn deadzone_edge_coasts_below_and_drives_at() {
        let config = DriveConfig::default();
        for mode in [DriveMode::Normal, DriveMode::Flipped] {
            assert_eq!(advanced(input(14, -14), mode, &config), DriveCommand::COAST);
            assert_eq!(intermediate(input(-14, 14), &config), DriveCommand::COAST);
            let cmd = advanced(input(15, 0), mode, &config);
            assert!(!cmd.left.is_stop() && !cmd.right.is_stop(), "{mode:?} -> {cmd:?}");
        }
        let cmd = intermediate(input(0, -15), &config);
        assert_eq!(
            cmd,
            DriveCommand::new(MotorCommand::Voltage(12.8), MotorCommand::Voltage(-12.8))
        );
    }

    #[test]
    fn beginner_stays_within_percent_range() {
        for raw in all_inputs() {
            let cmd = beginner(raw);
            for side in [cmd.left, cmd.right] {
                assert!(matches!(side, MotorCommand::Percent(p) if p.abs() <= 100.0), "{raw:?}");
            }
        }
    }

    #[test]
    fn advanced_full_forward() {
        let cmd = advanced(input(100, 0), DriveMode::Normal, &DriveConfig::default());
        assert_eq!(
            cmd,
            DriveCommand::new(MotorCommand::Voltage(12.8), MotorCommand::Voltage(12.8))
        );
    }

    #[test]
    fn advanced_half_forward_is_quarter_power() {
        let cmd = advanced(input(50, 0), DriveMode::Normal, &DriveConfig::default());
        assert!((cmd.left.value() - 3.2).abs() < 1e-9);
        assert!((cmd.right.value() - 3.2).abs() < 1e-9);
    }

    #[test]
    fn advanced_turn_is_negated() {
        let cmd = advanced(input(0, 100), DriveMode::Normal, &DriveConfig::default());
        assert_eq!(
            cmd,
            DriveCommand::new(MotorCommand::Voltage(12.8), MotorCommand::Voltage(-12.8))
        );
    }

    #[test]
    fn flip_inverts_drive_only() {
        let config = DriveConfig::default();
        let raw = input(60, 40);
        let normal = advanced(raw, DriveMode::Normal, &config);
        let flipped = advanced(raw, DriveMode::Flipped, &config);

        // recover the drive and turn contributions from the mix
        let contributions = |cmd: DriveCommand| {
            let (l, r) = (cmd.left.value(), cmd.right.value());
            ((l + r) / 2.0, (r - l) / 2.0)
        };
        let (drive_n, turn_n) = contributions(normal);
        let (drive_f, turn_f) = contributions(flipped);

        assert!(drive_n > 0.0);
        assert!((drive_f + drive_n).abs() < 1e-9);
        assert!((turn_f - turn_n).abs() < 1e-9);
    }

    #[test]
    fn flip_is_ignored_outside_advanced() {
        let config = DriveConfig::default();
        let raw = input(60, 20);
        for policy in [DrivePolicy::Beginner, DrivePolicy::Intermediate] {
            assert!(!policy.uses_mode());
            assert_eq!(
                policy.compute(raw, DriveMode::Flipped, &config),
                policy.compute(raw, DriveMode::Normal, &config)
            );
        }
    }

    #[test]
    fn compute_dispatches() {
        let config = DriveConfig::default();
        let raw = input(50, 0);
        assert_eq!(DrivePolicy::Beginner.compute(raw, DriveMode::Normal, &config), beginner(raw));
        assert_eq!(
            DrivePolicy::Intermediate.compute(raw, DriveMode::Normal, &config),
            intermediate(raw, &config)
        );
        assert_eq!(
            DrivePolicy::Advanced.compute(raw, DriveMode::Flipped, &config),
            advanced(raw, DriveMode::Flipped, &config)
        );
    }

    #[test]
    fn same_input_same_output() {
        let config = DriveConfig::default();
        let raw = input(-73, 38);
        let first = advanced(raw, DriveMode::Flipped, &config);
        for _ in 0..10 {
            assert_eq!(advanced(raw, DriveMode::Flipped, &config), first);
        }
    }
}

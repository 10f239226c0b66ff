//! Signal shaping primitives.
//!
//! Small, total functions the drive policies are built from. Raw stick
//! readings are integers in `[-100, 100]`; everything after the deadzone is
//! a real number in volts.

/// Magnitude of a full stick deflection.
pub const AXIS_RANGE: i32 = 100;

/// Highest voltage the drivetrain is ever commanded with.
pub const MAX_VOLTAGE: f64 = 12.8;

/// Deadzone that rejects drift on worn V5 controller sticks.
pub const DEFAULT_DEADZONE: i32 = 15;

/// Forces readings with a magnitude below `deadzone` to exactly zero.
///
/// Readings at or above the deadzone pass through unchanged; there is no
/// rescaling, so the first value out of the deadzone is `deadzone` itself.
pub const fn apply_deadzone(value: i32, deadzone: i32) -> i32 {
    if value.abs() < deadzone { 0 } else { value }
}

/// Clamps `volts` to `[-max, max]`.
pub fn clamp_voltage(volts: f64, max: f64) -> f64 { volts.clamp(-max, max) }

/// Exponential response curve.
///
/// Maps a stick reading in `[-100, 100]` to `[-max, max]` as
/// `sign(v) * (|v| / 100)^exponent * max`. Exponents above 1 give fine
/// control near the center of the stick while still reaching full power at
/// the edge; the larger the exponent the flatter the center.
///
/// The sign of the output always matches the sign of the input, and the
/// output is zero only for a zero input.
pub fn response_curve(value: f64, exponent: f64, max: f64) -> f64 {
    let magnitude = value.abs().powf(exponent) / f64::from(AXIS_RANGE).powf(exponent) * max;
    if value < 0.0 { -magnitude } else { magnitude }
}

/// Arcade mixing of a forward and a rotate axis into `(left, right)`.
///
/// A positive `turn` speeds up the right side and slows down the left.
pub fn arcade_mix(drive: f64, turn: f64) -> (f64, f64) { (drive - turn, drive + turn) }

//! Controller input sampling.
//!
//! The drive pipeline only needs three things from the handheld controller
//! each tick: the drive axis, the turn axis, and whether the drive-inversion
//! button is held. [`InputSource`] is the seam between the pipeline and
//! whatever provides those readings.

/// One tick's worth of stick readings.
///
/// Both axes are in `[-100, 100]`; [`RawInput::new`] clamps anything outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawInput {
    /// Forward/backward axis. Positive is forward.
    pub drive: i32,
    /// Rotate axis. Positive is to the right.
    pub turn:  i32,
}

impl RawInput {
    pub fn new(drive: i32, turn: i32) -> Self {
        Self {
            drive: drive.clamp(-100, 100),
            turn:  turn.clamp(-100, 100),
        }
    }
}

/// Everything the pipeline reads from the controller in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerSample {
    pub input:           RawInput,
    /// Level of the drive-inversion button, `true` while held.
    pub toggle_pressing: bool,
}

impl ControllerSample {
    pub fn new(drive: i32, turn: i32, toggle_pressing: bool) -> Self {
        Self {
            input: RawInput::new(drive, turn),
            toggle_pressing,
        }
    }
}

/// A polled source of controller readings.
pub trait InputSource {
    /// Forward/backward axis in `[-100, 100]`.
    fn drive_axis(&self) -> i32;

    /// Rotate axis in `[-100, 100]`.
    fn turn_axis(&self) -> i32;

    /// `true` while the drive-inversion button is held.
    fn toggle_pressing(&self) -> bool;

    /// Reads all three inputs at once.
    fn sample(&self) -> ControllerSample {
        ControllerSample::new(self.drive_axis(), self.turn_axis(), self.toggle_pressing())
    }
}

impl InputSource for ControllerSample {
    fn drive_axis(&self) -> i32 { self.input.drive }

    fn turn_axis(&self) -> i32 { self.input.turn }

    fn toggle_pressing(&self) -> bool { self.toggle_pressing }

    fn sample(&self) -> ControllerSample { *self }
}

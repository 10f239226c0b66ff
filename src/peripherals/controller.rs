//! V5 controller input for the drive pipeline.
//!
//! [`ControllerInput`] captures the controller state once per tick and
//! serves the drive axis, turn axis and drive-inversion button from that
//! snapshot, so all three readings come from the same instant.
//!
//! The default layout is split arcade: the left stick's vertical axis
//! (axis 3) drives, the right stick's horizontal axis (axis 1) turns.

use log::warn;
use vexide::controller::{ButtonState, Controller, ControllerState, JoystickState};

use crate::opcontrol::controller::InputSource;

/// A snapshot of the controller for one tick.
#[derive(Debug, Clone, Copy)]
pub struct ControllerInput {
    /// The state of all controller buttons and sticks.
    state:  ControllerState,
    /// The button that toggles drive inversion.
    toggle: ControllerButton,
}

impl ControllerInput {
    /// Reads the controller. If the read fails, a zeroed state is used (no
    /// movement, no buttons) and a warning is logged.
    pub fn read(controller: &Controller, toggle: ControllerButton) -> Self {
        Self {
            state: get_state(controller),
            toggle,
        }
    }
}

impl InputSource for ControllerInput {
    fn drive_axis(&self) -> i32 { axis_percent(self.state.left_stick, Axis::Y) }

    fn turn_axis(&self) -> i32 { axis_percent(self.state.right_stick, Axis::X) }

    fn toggle_pressing(&self) -> bool {
        get_button_state(self.state, self.toggle).is_pressed()
    }
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// Stick position as a whole percentage in `[-100, 100]`.
fn axis_percent(stick: JoystickState, axis: Axis) -> i32 {
    let value = match axis {
        Axis::X => stick.x(),
        Axis::Y => stick.y(),
    };
    (value * 100.0).round().clamp(-100.0, 100.0) as i32
}

/// A list of Controller Buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerButton {
    ButtonA,
    ButtonB,
    ButtonX,
    ButtonY,
    ButtonUp,
    ButtonDown,
    ButtonLeft,
    ButtonRight,
    ButtonL1,
    ButtonL2,
    ButtonR1,
    ButtonR2,
}

fn get_button_state(state: ControllerState, button: ControllerButton) -> ButtonState {
    match button {
        ControllerButton::ButtonA => state.button_a,
        ControllerButton::ButtonB => state.button_b,
        ControllerButton::ButtonX => state.button_x,
        ControllerButton::ButtonY => state.button_y,
        ControllerButton::ButtonUp => state.button_up,
        ControllerButton::ButtonDown => state.button_down,
        ControllerButton::ButtonLeft => state.button_left,
        ControllerButton::ButtonRight => state.button_right,
        ControllerButton::ButtonL1 => state.button_l1,
        ControllerButton::ButtonL2 => state.button_l2,
        ControllerButton::ButtonR1 => state.button_r1,
        ControllerButton::ButtonR2 => state.button_r2,
    }
}

fn get_state(controller: &Controller) -> ControllerState {
    controller.state().unwrap_or_else(|e| {
        warn!("Controller State Error: {}", e);
        ControllerState::default()
    })
}

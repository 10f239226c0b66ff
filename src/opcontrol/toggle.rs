//! Debounced drive-inversion toggle.
//!
//! The driver flips the robot's notion of "forward" with a single button.
//! A press is recognized on the rising edge of the button level, and once a
//! toggle is accepted further presses are ignored until the cooldown has
//! passed. Time is passed in by the caller as a monotonic uptime, so the
//! toggle never blocks the control loop.

use std::{fmt, time::Duration};

/// Which end of the robot is the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriveMode {
    #[default]
    Normal,
    /// Drive axis is inverted.
    Flipped,
}

impl DriveMode {
    pub const fn is_flipped(self) -> bool { matches!(self, Self::Flipped) }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Flipped,
            Self::Flipped => Self::Normal,
        }
    }
}

impl fmt::Display for DriveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Flipped => f.write_str("flipped"),
        }
    }
}

/// Edge detector with a cooldown, holding the current [`DriveMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebouncedToggle {
    mode:         DriveMode,
    was_pressing: bool,
    last_toggle:  Option<Duration>,
    cooldown:     Duration,
}

impl DebouncedToggle {
    pub const fn new(cooldown: Duration) -> Self {
        Self {
            mode: DriveMode::Normal,
            was_pressing: false,
            last_toggle: None,
            cooldown,
        }
    }

    pub const fn mode(&self) -> DriveMode { self.mode }

    /// Feeds one button sample taken at uptime `now`.
    ///
    /// Returns `true` if this sample toggled the mode.
    pub fn update(&mut self, pressing: bool, now: Duration) -> bool {
        let fresh_press = pressing && !self.was_pressing;
        self.was_pressing = pressing;

        let cooled = self
            .last_toggle
            .is_none_or(|last| now.saturating_sub(last) >= self.cooldown);

        if fresh_press && cooled {
            self.mode = self.mode.toggled();
            self.last_toggle = Some(now);
            true
        } else {
            false
        }
    }
}

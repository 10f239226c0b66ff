//! Drive tunables.
//!
//! All of the numbers that shape how the robot feels to drive live in
//! [`DriveConfig`]. The defaults are what most drivers want; teams that
//! prefer something else can drop a `drive.toml` on the SD card:
//!
//! ```toml
//! policy = "intermediate"
//! deadzone = 10
//! max_voltage = 12.0
//! ```
//!
//! Keys that are left out keep their defaults.

use std::{fs, path::Path, time::Duration};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    opcontrol::{policy::DrivePolicy, shaping},
};

/// Default location of the config file on the SD card.
pub const CONFIG_PATH: &str = "drive.toml";

/// Tunables for the drive pipeline and the driver control loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriveConfig {
    /// Which drive policy turns sticks into motor commands.
    pub policy:         DrivePolicy,
    /// Axis readings with a smaller magnitude than this are treated as zero.
    pub deadzone:       i32,
    /// Output ceiling, in volts. Never above [`shaping::MAX_VOLTAGE`].
    pub max_voltage:    f64,
    /// Response curve exponent for the drive axis.
    pub drive_exponent: f64,
    /// Response curve exponent for the turn axis.
    pub turn_exponent:  f64,
    /// Minimum time between two accepted drive-inversion toggles.
    pub debounce_ms:    u64,
    /// Driver control loop period.
    pub tick_ms:        u64,
    /// Torque limit for the drivetrain motors, in percent.
    pub torque_limit:   f64,
    /// Rumble pattern sent every tick while the drive is inverted.
    pub rumble_pattern: String,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            policy:         DrivePolicy::default(),
            deadzone:       shaping::DEFAULT_DEADZONE,
            max_voltage:    shaping::MAX_VOLTAGE,
            drive_exponent: 2.0,
            turn_exponent:  3.5,
            debounce_ms:    100,
            tick_ms:        50,
            torque_limit:   100.0,
            rumble_pattern: "-".to_owned(),
        }
    }
}

impl DriveConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file can't be read, otherwise the
    /// same errors as [`DriveConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Like [`DriveConfig::load`], but logs the problem and falls back to
    /// the defaults instead of failing. A missing file is not a problem.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded drive config from {}", path.display());
                config
            }
            Err(ConfigError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                info!("No {} found, using default drive config", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Drive Config Error: {}", e);
                Self::default()
            }
        }
    }

    /// Checks every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason: &str| {
            Err(ConfigError::Invalid {
                field,
                reason: reason.to_owned(),
            })
        };

        if !(0..=shaping::AXIS_RANGE).contains(&self.deadzone) {
            return invalid("deadzone", "must be between 0 and 100");
        }
        if !(self.max_voltage > 0.0 && self.max_voltage <= shaping::MAX_VOLTAGE) {
            return invalid("max_voltage", "must be above 0 and at most 12.8");
        }
        for (field, exponent) in [
            ("drive_exponent", self.drive_exponent),
            ("turn_exponent", self.turn_exponent),
        ] {
            if !(exponent.is_finite() && exponent > 0.0) {
                return invalid(field, "must be a positive number");
            }
        }
        if self.tick_ms == 0 {
            return invalid("tick_ms", "must be at least 1");
        }
        if !(0.0..=100.0).contains(&self.torque_limit) {
            return invalid("torque_limit", "must be between 0 and 100");
        }
        if self.rumble_pattern.is_empty()
            || self.rumble_pattern.len() > 8
            || !self.rumble_pattern.chars().all(|c| matches!(c, '.' | '-' | ' '))
        {
            return invalid(
                "rumble_pattern",
                "must be 1 to 8 of '.', '-' and ' '",
            );
        }
        Ok(())
    }

    /// Minimum time between two accepted drive-inversion toggles.
    pub const fn debounce(&self) -> Duration { Duration::from_millis(self.debounce_ms) }

    /// Driver control loop period.
    pub const fn tick_interval(&self) -> Duration { Duration::from_millis(self.tick_ms) }
}

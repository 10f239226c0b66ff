//! Error types.
//!
//! The drive pipeline itself cannot fail; errors only come from loading
//! the drive config off the SD card.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a [`DriveConfig`](crate::config::DriveConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has the wrong shape.
    #[error("failed to parse drive config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field:  &'static str,
        reason: String,
    },
}

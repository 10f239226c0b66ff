//! Filesystem utilities for the V5 Brain.
//!
//! This module provides utilities for interacting with the V5 Brain's
//! filesystem. The drive config itself is read by
//! [`DriveConfig::load_or_default`](crate::config::DriveConfig::load_or_default).
//!
//! # Logging
//!
//! The `logger` submodule provides a file-based logger that writes to
//! `log.txt` on the SD card. This is useful for debugging issues that
//! only occur on the robot.
//!
//! # Example
//!
//! ```ignore
//! use tiller::fs::logger;
//! use log::{info, LevelFilter};
//!
//! logger::init(LevelFilter::Info).expect("Failed to initialize logger");
//! info!("Robot initialized successfully");
//! ```

/// File-based logging for the V5 Brain.
///
/// Provides a logger implementation that writes to both the console
/// and a file on the SD card.
pub mod logger;

//! File-based logger implementation for the V5 Brain.
//!
//! This module implements the [`log`] crate's logging facade, writing log
//! messages to both the console (terminal/debug output) and a file on the
//! V5 Brain's SD card.
//!
//! # Usage
//!
//! Initialize the logger once at the start of your program:
//!
//! ```ignore
//! use tiller::fs::logger;
//! use log::{info, LevelFilter};
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     logger::init(LevelFilter::Info).expect("Logger init failed");
//!     info!("Program started");
//! }
//! ```
//!
//! # Log Output
//!
//! Logs are written to `log.txt` in the root of the SD card. Each log entry
//! includes the level, the time since program start, the target and the
//! message:
//!
//! ```text
//! INFO [2m 5s 123ms] tiller::opcontrol::teleop - Drive direction is now flipped
//! WARN [2m 5s 456ms] tiller::peripherals::controller - Controller State Error: Offline
//! ```

use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
    sync::Mutex,
    time::Duration,
};

use humantime::format_duration;
use log::{LevelFilter, Metadata, Record, SetLoggerError};

/// Default log file, relative to the SD card root.
pub const LOG_PATH: &str = "log.txt";

/// A dual-output logger.
///
/// Writes log messages to both the console and a file. The file is
/// created/truncated when the logger is initialized.
pub struct TillerLogger {
    /// Buffered file writer for log output.
    ///
    /// May be `None` if the file could not be opened (e.g., no SD card
    /// present), in which case only the console is written.
    file_writer: Mutex<Option<BufWriter<std::fs::File>>>,
}

impl TillerLogger {
    fn new(path: &Path) -> Self {
        let file_writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .ok()
            .map(BufWriter::new);

        Self {
            file_writer: Mutex::new(file_writer),
        }
    }
}

impl log::Log for TillerLogger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let log_line = format_line(record, uptime());

            print!("{}", log_line);

            if let Ok(mut writer_guard) = self.file_writer.lock() {
                if let Some(ref mut writer) = *writer_guard {
                    let _ = writer.write_all(log_line.as_bytes());
                }
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut writer_guard) = self.file_writer.lock() {
            if let Some(ref mut writer) = *writer_guard {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: std::sync::OnceLock<TillerLogger> = std::sync::OnceLock::new();

/// Initializes the logger, writing to [`LOG_PATH`].
///
/// This function must be called once before any logging macros are used.
///
/// # Arguments
///
/// * `level` - The minimum log level to record. Messages below this level
///   will be ignored.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> { init_with_file(level, LOG_PATH) }

/// Initializes the logger, writing to `path` instead of [`LOG_PATH`].
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init_with_file(level: LevelFilter, path: impl AsRef<Path>) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| TillerLogger::new(path.as_ref()));
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Formats one log line, newline included.
fn format_line(record: &Record, uptime: Duration) -> String {
    // Sub-millisecond digits are noise at a 50ms tick.
    let uptime = Duration::from_millis(uptime.as_millis() as u64);
    format!(
        "{} [{}] {} - {}\n",
        record.level(),
        format_duration(uptime),
        record.target(),
        record.args()
    )
}

/// Time since the user program started.
#[cfg(target_vendor = "vex")]
fn uptime() -> Duration { vexide::time::user_uptime() }

/// Time since the logger was first used.
#[cfg(not(target_vendor = "vex"))]
fn uptime() -> Duration {
    static START: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();
    START.get_or_init(std::time::Instant::now).elapsed()
}

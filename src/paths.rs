//! Filesystem locations.

use std::path::PathBuf;

/// File name of the debug log.
pub const LOG_FILE_NAME: &str = "gbt.log";

/// Directory the debug log is written to.
///
/// This is the OS temp directory.
#[must_use]
pub fn log_dir() -> PathBuf {
    std::env::temp_dir()
}

/// Path to the debug log file.
#[must_use]
pub fn log_path() -> PathBuf {
    log_dir().join(LOG_FILE_NAME)
}

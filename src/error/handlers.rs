//! Error handlers
//!
//! Logging and exit-code mapping for the `pwdb` binary.

use crate::error::types::PwdbError;
use log::error;

/// Exit status when every requested user exists
pub const EXIT_ALL_FOUND: i32 = 0;
/// Exit status when at least one requested user is missing
pub const EXIT_NOT_FOUND: i32 = 1;
/// Exit status for usage and configuration problems
pub const EXIT_USAGE: i32 = 2;
/// Exit status when output could not be written
pub const EXIT_IO: i32 = 3;

/// Log a pwdb error
pub fn handle_error(err: &PwdbError) {
    error!("pwdb error: {}", err);
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &PwdbError) -> i32 {
    match err {
        PwdbError::Config(_) => EXIT_USAGE,
        PwdbError::Io(_) => EXIT_IO,
    }
}

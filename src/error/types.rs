//! Error types
//!
//! The lookup itself cannot fail; these cover configuration and output.

use std::fmt;
use std::io;

/// Top-level pwdb error
#[derive(Debug)]
pub enum PwdbError {
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for PwdbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PwdbError::Config(e) => write!(f, "Configuration error: {}", e),
            PwdbError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PwdbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PwdbError::Config(e) => Some(e),
            PwdbError::Io(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for PwdbError {
    fn from(error: config::ConfigError) -> Self {
        PwdbError::Config(error)
    }
}

impl From<io::Error> for PwdbError {
    fn from(error: io::Error) -> Self {
        PwdbError::Io(error)
    }
}

//! Logging utilities
//!
//! Provides logging setup and lookup reporting.

use env_logger::Env;
use log::info;

/// Setup logging for the binary. `RUST_LOG` overrides the `warn` default.
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}

/// Log the outcome of a lookup
pub fn log_lookup(username: &str, exists: bool) {
    info!("Lookup {:?}: exists={}", username, exists);
}

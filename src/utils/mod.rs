//! Utility functions
//!
//! Provides logging helpers.

pub mod logging;

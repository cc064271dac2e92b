//! Error handling
//!
//! Defines error types and handling for pwdb.

pub mod handlers;
pub mod types;

pub use types::*;

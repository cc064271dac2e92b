//! Authentication lookups
//!
//! Credential table plus the simulated slow user lookup.

pub mod credentials;
pub mod lookup;

pub use lookup::{
    check_user_exists, check_user_exists_async, check_user_exists_with, simulated_latency,
};

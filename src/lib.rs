pub mod auth;
pub mod config;
pub mod error;
pub mod utils;

pub use auth::{check_user_exists, check_user_exists_async, check_user_exists_with};
pub use crate::config::LookupConfig;
pub use error::PwdbError;

//! Configuration management for pwdb
//!
//! Lookup behaviour is read from an optional `pwdb.toml` with `PWDB_`
//! environment overrides. Every key has a default, so no file is required.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

/// Optional config file, looked up in the working directory
const CONFIG_FILE: &str = "pwdb";

/// Environment prefix, e.g. `PWDB_STEP_DELAY_MS=10`
const ENV_PREFIX: &str = "PWDB";

/// Settings for the simulated slow lookup
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LookupConfig {
    /// Sleep charged per username character, in milliseconds
    pub step_delay_ms: u64,

    /// Write a progress marker after each step
    pub show_progress: bool,

    /// Text written after each step
    pub progress_marker: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 1000,
            show_progress: true,
            progress_marker: ".".to_string(),
        }
    }
}

impl LookupConfig {
    /// Load configuration from pwdb.toml (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Self::from_settings(settings)
    }

    /// Parse configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::from_settings(settings)
    }

    /// Configuration with no delay and no progress output
    pub fn silent() -> Self {
        Self {
            step_delay_ms: 0,
            show_progress: false,
            ..Self::default()
        }
    }

    /// Get the per-character delay as Duration
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    fn from_settings(settings: Config) -> Result<Self, config::ConfigError> {
        let config: LookupConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.show_progress && self.progress_marker.is_empty() {
            return Err(config::ConfigError::Message(
                "progress_marker cannot be empty when show_progress is enabled".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_one_second_per_char() {
        let config = LookupConfig::default();
        assert_eq!(config.step_delay(), Duration::from_secs(1));
        assert!(config.show_progress);
        assert_eq!(config.progress_marker, ".");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LookupConfig::from_toml_str("step_delay_ms = 25").unwrap();
        assert_eq!(config.step_delay_ms, 25);
        assert!(config.show_progress);
        assert_eq!(config.progress_marker, ".");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = LookupConfig::from_toml_str("").unwrap();
        assert_eq!(config, LookupConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let toml = r#"
            step_delay_ms = 0
            show_progress = false
            progress_marker = "*"
        "#;
        let config = LookupConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.step_delay(), Duration::ZERO);
        assert!(!config.show_progress);
        assert_eq!(config.progress_marker, "*");
    }

    #[test]
    fn test_empty_marker_rejected_with_progress() {
        let result = LookupConfig::from_toml_str(r#"progress_marker = """#);
        assert!(matches!(result, Err(config::ConfigError::Message(_))));
    }

    #[test]
    fn test_empty_marker_allowed_without_progress() {
        let toml = r#"
            show_progress = false
            progress_marker = ""
        "#;
        assert!(LookupConfig::from_toml_str(toml).is_ok());
    }

    #[test]
    fn test_silent_has_no_delay() {
        let config = LookupConfig::silent();
        assert_eq!(config.step_delay(), Duration::ZERO);
        assert!(!config.show_progress);
    }
}

//! Configuration schema types
//!
//! This module defines the configuration structure for Encoda. The file has
//! three fixed sections plus the flat `[settings]` table consumed by
//! [`crate::config::store::ExportPrefs`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// Main Encoda configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodaConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Host scripting gateway configuration
    pub host: HostConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Flat export settings map (string keys, string values)
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
}

impl EncodaConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.host.validate()?;
        self.logging.validate()?;

        // The settings table itself is free-form; the typed snapshot is
        // where values get checked.
        crate::config::store::ExportPrefs::from_store(&self.settings).validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Host scripting gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Base URL of the host's scripting gateway
    pub base_url: String,

    /// Per-request timeout in seconds (0 disables the deadline)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Deadline for the initial selection query before falling back to the
    /// active-sequence path, in seconds
    #[serde(default = "default_selection_timeout_secs")]
    pub selection_timeout_secs: u64,
}

impl HostConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("host.base_url cannot be empty".to_string());
        }
        Url::parse(&self.base_url)
            .map_err(|e| format!("host.base_url '{}' is not a valid URL: {}", self.base_url, e))?;
        if self.selection_timeout_secs == 0 {
            return Err("host.selection_timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            base_url: default_host_url(),
            request_timeout_secs: default_request_timeout_secs(),
            selection_timeout_secs: default_selection_timeout_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable the append-only debug log file
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory for debug log files
    #[serde(default = "default_log_path")]
    pub file_path: String,

    /// Rotation policy (daily or hourly); rotated files are kept, never
    /// cleared
    #[serde(default = "default_log_rotation")]
    pub file_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.file_rotation.as_str()) {
            return Err(format!(
                "Invalid file_rotation '{}'. Must be one of: {}",
                self.file_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.file_enabled && self.file_path.trim().is_empty() {
            return Err("logging.file_path cannot be empty when file logging is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_enabled: false,
            file_path: default_log_path(),
            file_rotation: default_log_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_host_url() -> String {
    "http://127.0.0.1:8089".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_selection_timeout_secs() -> u64 {
    3
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_toml() -> &'static str {
        r#"
            [host]
            base_url = "http://127.0.0.1:8089"
        "#
    }

    #[test]
    fn test_minimal_config_parses_with_defaults() {
        let config: EncodaConfig = toml::from_str(minimal_toml()).unwrap();

        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.host.request_timeout_secs, 30);
        assert_eq!(config.host.selection_timeout_secs, 3);
        assert!(config.settings.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_settings_table_parses_as_flat_strings() {
        let config: EncodaConfig = toml::from_str(
            r#"
            [host]
            base_url = "http://127.0.0.1:8089"

            [settings]
            naming_pattern = "{SEQ}_V{VV}"
            direct_export = "false"
            folder_depth = "1"
        "#,
        )
        .unwrap();

        assert_eq!(
            config.settings.get("naming_pattern"),
            Some(&"{SEQ}_V{VV}".to_string())
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config: EncodaConfig = toml::from_str(minimal_toml()).unwrap();
        config.application.log_level = "verbose".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_host_url_rejected() {
        let mut config: EncodaConfig = toml::from_str(minimal_toml()).unwrap();
        config.host.base_url = "not a url".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_selection_timeout_rejected() {
        let mut config: EncodaConfig = toml::from_str(minimal_toml()).unwrap();
        config.host.selection_timeout_secs = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let mut config: EncodaConfig = toml::from_str(minimal_toml()).unwrap();
        config.logging.file_rotation = "weekly".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_settings_value_rejected() {
        let config: EncodaConfig = toml::from_str(
            r#"
            [host]
            base_url = "http://127.0.0.1:8089"

            [settings]
            export_folder_name = "a/b"
        "#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }
}

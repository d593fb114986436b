//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Encoda configuration file.

use crate::config::{load_config, ExportPrefs};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates on the way in, so reaching Ok means the
        // file is both parseable and valid.
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let prefs = ExportPrefs::from_store(&config.settings);

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Host Gateway: {}", config.host.base_url);
        println!("  Request Timeout: {}s", config.host.request_timeout_secs);
        println!("  Selection Timeout: {}s", config.host.selection_timeout_secs);
        println!("  File Logging: {}", config.logging.file_enabled);
        println!("  Naming Pattern: {}", prefs.naming_pattern);
        println!("  Export Folder: {} (depth {})", prefs.folder_name, prefs.folder_depth);

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_validate_missing_file_reports_config_error() {
        let args = ValidateArgs {};
        let code = args
            .execute("/definitely/not/a/real/encoda.toml")
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}

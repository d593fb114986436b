//! Export command implementation
//!
//! This module implements the `export` command: one export run over the
//! current project-panel selection, or the active sequence when nothing is
//! selected or `--single` is given.

use crate::adapters::host::HostClient;
use crate::config::{keys, load_config, ExportPrefs};
use crate::core::export::{BatchOrchestrator, BatchSummary, SingleExporter};
use crate::domain::EncodaError;
use crate::platform::NativeDefaults;
use clap::Args;
use std::sync::Arc;
use std::time::Duration;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Skip the selection query and export the active sequence
    #[arg(long)]
    pub single: bool,

    /// Render in-process in the editor, bypassing the encoder queue
    #[arg(long)]
    pub direct: bool,

    /// Bound the export to the sequence's in/out range
    #[arg(long)]
    pub in_out: bool,

    /// Override the naming pattern for this run
    #[arg(long, value_name = "PATTERN")]
    pub pattern: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        // Apply CLI overrides onto the flat settings map so the snapshot
        // sees them exactly like persisted values.
        if let Some(pattern) = &self.pattern {
            tracing::info!(pattern = %pattern, "Overriding naming pattern from CLI");
            config
                .settings
                .insert(keys::NAMING_PATTERN.to_string(), pattern.clone());
        }
        if self.direct {
            tracing::info!("Enabling direct export from CLI");
            config
                .settings
                .insert(keys::DIRECT_EXPORT.to_string(), "true".to_string());
        }
        if self.in_out {
            config
                .settings
                .insert(keys::USE_IN_OUT.to_string(), "true".to_string());
        }

        let prefs = ExportPrefs::from_store(&config.settings);
        if let Err(e) = prefs.validate() {
            tracing::error!(error = %e, "Settings validation failed");
            eprintln!("Settings validation failed: {e}");
            return Ok(2);
        }

        let host = match HostClient::new(&config.host) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create host client");
                eprintln!("Failed to initialize host connection: {e}");
                return Ok(4);
            }
        };

        let platform = Arc::new(NativeDefaults);

        println!("🚀 Starting export...");
        println!();

        let run = if self.single && !prefs.direct_export {
            // Forced single-item run; the selection is never consulted.
            SingleExporter::new(host.as_ref(), platform.as_ref(), &prefs)
                .execute(false)
                .await
        } else {
            BatchOrchestrator::new(host, platform, prefs)
                .with_selection_timeout(Duration::from_secs(config.host.selection_timeout_secs))
                .execute()
                .await
        };

        let summary = match run {
            Ok(summary) => summary,
            Err(EncodaError::Host(e)) if e.is_connection() => {
                tracing::error!(error = %e, "Host is unreachable");
                eprintln!("Host is unreachable: {e}");
                return Ok(4);
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(5);
            }
        };

        print_summary(&summary);

        // Partial failures share exit code 1; the summary above says which
        // items were affected.
        let exit_code = if summary.is_successful() { 0 } else { 1 };
        Ok(exit_code)
    }
}

/// Print the run outcome: one status line plus details for failures
fn print_summary(summary: &BatchSummary) {
    println!("{}", summary.status_line());

    if summary.total_items > 1 || !summary.errors.is_empty() {
        println!();
        println!("📊 Export Summary:");
        println!("  Items: {}", summary.total_items);
        println!("  Submitted: {}", summary.submitted);
        println!("  Failed: {}", summary.failed);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    }

    if !summary.errors.is_empty() {
        println!();
        println!("⚠️  Errors encountered:");
        for error in &summary.errors {
            match &error.context {
                Some(context) => {
                    println!("  - {:?} ({}): {}", error.step, context, error.message)
                }
                None => println!("  - {:?}: {}", error.step, error.message),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_args_defaults() {
        let args = ExportArgs {
            single: false,
            direct: false,
            in_out: false,
            pattern: None,
        };

        assert!(!args.single);
        assert!(!args.direct);
        assert!(!args.in_out);
        assert!(args.pattern.is_none());
    }

    #[test]
    fn test_export_args_with_overrides() {
        let args = ExportArgs {
            single: true,
            direct: true,
            in_out: true,
            pattern: Some("{SEQ}_{DATE}_V{VV}".to_string()),
        };

        assert!(args.single);
        assert!(args.direct);
        assert_eq!(args.pattern.as_deref(), Some("{SEQ}_{DATE}_V{VV}"));
    }
}

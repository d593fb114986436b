//! Status command implementation
//!
//! This module implements the `status` command: a quick look at what the
//! host sees (active sequence, selection, environment) and the effective
//! export settings.

use crate::adapters::host::{HostBridge, HostClient};
use crate::config::{load_config, ExportPrefs};
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Querying host status");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        let host = match HostClient::new(&config.host) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("Failed to initialize host connection: {e}");
                return Ok(4);
            }
        };

        println!("🔍 Host: {}", host.base_url());

        match host.get_system_info().await {
            Ok(info) => {
                println!("  OS: {}", if info.is_windows { "Windows" } else { "macOS/Unix" });
                if !info.downloads_path.is_empty() {
                    println!("  Downloads: {}", info.downloads_path);
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Host is not responding");
                eprintln!("❌ Host is not responding: {e}");
                return Ok(4);
            }
        }

        match host.get_active_sequence().await {
            Ok(name) => println!("  Active sequence: {name}"),
            Err(e) => {
                tracing::debug!(error = %e, "No active sequence");
                println!("  Active sequence: (none)");
            }
        }

        match host.get_selected_sequences().await {
            Ok(sequences) if sequences.is_empty() => println!("  Selection: (empty)"),
            Ok(sequences) => {
                println!("  Selection: {} sequence(s)", sequences.len());
                for info in &sequences {
                    println!("    - {}", info.name);
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "Selection query failed");
                println!("  Selection: (unavailable)");
            }
        }

        let prefs = ExportPrefs::from_store(&config.settings);
        println!();
        println!("⚙️  Export settings:");
        println!("  Naming pattern: {}", prefs.naming_pattern);
        println!("  Export folder: {} (depth {})", prefs.folder_name, prefs.folder_depth);
        println!(
            "  Video preset: {}",
            prefs
                .video_preset_path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in default)".to_string())
        );
        println!(
            "  Audio preset: {}",
            prefs
                .audio_preset_path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in default)".to_string())
        );
        println!("  Fixed folder mode: {}", prefs.use_fixed_folder);
        println!("  In/out range only: {}", prefs.use_in_out);
        println!("  Direct export: {}", prefs.direct_export);

        Ok(0)
    }
}

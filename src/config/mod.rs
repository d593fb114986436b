//! Configuration management for Encoda.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation, plus the flat export-settings store consumed by the core.
//!
//! # Overview
//!
//! Encoda uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `ENCODA_*` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use encoda::config::{load_config, ExportPrefs};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("encoda.toml")?;
//!
//! println!("Host gateway: {}", config.host.base_url);
//!
//! // Typed snapshot of the flat [settings] table
//! let prefs = ExportPrefs::from_store(&config.settings);
//! println!("Naming pattern: {}", prefs.naming_pattern);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [host]
//! base_url = "http://127.0.0.1:8089"
//! request_timeout_secs = 30
//! selection_timeout_secs = 3
//!
//! [logging]
//! file_enabled = true
//! file_path = "./logs"
//!
//! [settings]
//! video_preset_path = "/presets/h264-high.epr"
//! audio_preset_path = "/presets/wav-48k.epr"
//! naming_pattern = "{SEQ}_V{V}"
//! export_folder_name = "EXPORTS"
//! folder_depth = "0"
//! use_fixed_folder = "false"
//! direct_export = "false"
//! ```
//!
//! The `[settings]` table is deliberately a flat string map: it mirrors the
//! persisted panel settings this tool replaces, booleans included
//! (`"true"`/`"false"`). [`ExportPrefs`] is the typed view.

pub mod loader;
pub mod schema;
pub mod store;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, EncodaConfig, HostConfig, LoggingConfig};
pub use store::{keys, ExportPrefs, SettingsStore};

// Encoda - batch export bridge for a timeline editor
// Copyright (c) 2025 Encoda Contributors
// Licensed under the MIT License

//! # Encoda - batch export bridge for a timeline editor
//!
//! Encoda drives a timeline/video editor's scripting gateway to export one
//! or more sequences through an external encoder's shared render queue,
//! resolving presets, output folders and versioned filenames from persisted
//! settings.
//!
//! ## Architecture
//!
//! Encoda follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (filename resolution, export orchestration)
//! - [`adapters`] - External integrations (the host scripting gateway)
//! - [`platform`] - Environmental defaults (preset paths, Downloads folder)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration and the flat settings store
//! - [`logging`] - Structured logging and the append-only debug log
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use encoda::adapters::host::HostClient;
//! use encoda::config::{load_config, ExportPrefs};
//! use encoda::core::export::BatchOrchestrator;
//! use encoda::platform::NativeDefaults;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("encoda.toml")?;
//!
//!     // Connect to the host gateway and snapshot the settings
//!     let host = Arc::new(HostClient::new(&config.host)?);
//!     let prefs = ExportPrefs::from_store(&config.settings);
//!
//!     // Run one export
//!     let orchestrator = BatchOrchestrator::new(host, Arc::new(NativeDefaults), prefs);
//!     let summary = orchestrator.execute().await?;
//!
//!     println!("{}", summary.status_line());
//!     Ok(())
//! }
//! ```
//!
//! ## Versioned Filenames
//!
//! Output names come from a token pattern rendered per export:
//!
//! ```rust
//! use encoda::core::naming::pattern::render_pattern;
//!
//! assert_eq!(render_pattern("{SEQ}_V{VV}", 3, "Edit"), "Edit_V03");
//! ```
//!
//! The version number is one past the highest `_V<digits>` marker among
//! files already in the output folder, so repeated exports never collide.
//!
//! ## Batch Semantics
//!
//! The encoder's queue is a single shared resource keyed by submission
//! order. A batch submits every item individually, in strict selection
//! order, and only then issues one start call that flushes the queue.
//! One item's failure never aborts the batch; the run summary carries the
//! per-step failures.
//!
//! ## Error Handling
//!
//! Encoda uses the [`domain::EncodaError`] type for all errors:
//!
//! ```rust,no_run
//! use encoda::domain::EncodaError;
//!
//! fn example() -> Result<(), EncodaError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = encoda::config::load_config("encoda.toml")?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod platform;

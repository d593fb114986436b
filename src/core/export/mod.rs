//! Export orchestration
//!
//! The batch state machine and everything it leans on: per-item planning,
//! the single-item fallback, container inference, and run summaries.
//!
//! # Modules
//!
//! - [`orchestrator`] - sequential batch state machine, queue-then-flush
//! - [`single`] - active-sequence fallback and direct-export path
//! - [`planner`] - per-item preset/folder/version/filename resolution
//! - [`extension`] - container extension inference from preset names
//! - [`summary`] - success/error aggregation and the user-facing status line
//!
//! # Export Workflow
//!
//! 1. **Snapshot settings**: one [`crate::config::ExportPrefs`] per run
//! 2. **Query selection**: guarded by a timeout, every failure mode falls
//!    back to the active sequence
//! 3. **Per item**: video check, plan (preset, folder, version, filename),
//!    submit to the encoder queue
//! 4. **Flush**: one `startEncoderBatch` after all submissions
//! 5. **Report**: a [`summary::BatchSummary`] with per-step failures
//!
//! # Example
//!
//! ```rust,no_run
//! use encoda::adapters::host::HostClient;
//! use encoda::config::{load_config, ExportPrefs};
//! use encoda::core::export::BatchOrchestrator;
//! use encoda::platform::NativeDefaults;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("encoda.toml")?;
//! let host = Arc::new(HostClient::new(&config.host)?);
//! let prefs = ExportPrefs::from_store(&config.settings);
//!
//! let orchestrator = BatchOrchestrator::new(host, Arc::new(NativeDefaults), prefs);
//! let summary = orchestrator.execute().await?;
//!
//! println!("{}", summary.status_line());
//! # Ok(())
//! # }
//! ```

pub mod extension;
pub mod orchestrator;
pub mod planner;
pub mod single;
pub mod summary;

pub use extension::infer_extension;
pub use orchestrator::{BatchOrchestrator, DEFAULT_SELECTION_TIMEOUT};
pub use planner::{ExportPlanner, PlannedExport};
pub use single::SingleExporter;
pub use summary::{BatchSummary, ExportError, ExportMode, ExportStep};

//! Logging and observability
//!
//! This module provides structured logging with:
//! - console output with a configurable level
//! - an optional append-only JSON debug log file with rotation
//!
//! The CLI prints a single status line per run; everything else, including
//! every per-item step and failure, goes through `tracing` so the debug
//! log has the full story.
//!
//! # Example
//!
//! ```no_run
//! use encoda::logging::init_logging;
//! use encoda::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

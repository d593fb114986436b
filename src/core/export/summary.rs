//! Export run summary and reporting
//!
//! This module defines structures for tracking and reporting the outcome of
//! an export run: how many items were queued, which steps failed, and
//! whether the encoder batch was actually started. One item's failure never
//! aborts a run, so the summary is the only place partial failures surface.

use crate::domain::ids::JobId;
use std::time::Duration;

/// Which path an export run took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// Multi-item batch over the project-panel selection
    Batch,
    /// Active-sequence fallback when the selection was empty or unavailable
    SingleFallback,
    /// In-process render in the editor, bypassing the encoder queue
    Direct,
}

impl ExportMode {
    /// Short lowercase label for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportMode::Batch => "batch",
            ExportMode::SingleFallback => "single",
            ExportMode::Direct => "direct",
        }
    }
}

/// Pipeline step a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStep {
    /// Settings snapshot validation
    Configuration,
    /// Selection query
    Selection,
    /// Per-item visible-video check
    VideoCheck,
    /// Output folder resolution
    FolderResolution,
    /// Version number resolution
    VersionResolution,
    /// Encode submission to the queue
    Submission,
    /// The final queue flush
    QueueStart,
    /// In-process render call
    Direct,
}

/// A failure recorded during an export run
#[derive(Debug, Clone)]
pub struct ExportError {
    /// Step the failure is attributed to
    pub step: ExportStep,

    /// Error message
    pub message: String,

    /// Optional context (usually the sequence name)
    pub context: Option<String>,
}

impl ExportError {
    /// Create a new export error
    pub fn new(step: ExportStep, message: impl Into<String>) -> Self {
        Self {
            step,
            message: message.into(),
            context: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Summary of one export run
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Path the run took
    pub mode: ExportMode,

    /// Number of items attempted
    pub total_items: usize,

    /// Number of items successfully submitted
    pub submitted: usize,

    /// Number of items that failed at any step
    pub failed: usize,

    /// Job IDs returned by the encoder for queued items
    pub jobs: Vec<JobId>,

    /// Whether the encoder queue was started
    pub batch_started: bool,

    /// Duration of the run
    pub duration: Duration,

    /// Failures recorded during the run
    pub errors: Vec<ExportError>,
}

impl BatchSummary {
    /// Create a new empty summary for the given mode
    pub fn new(mode: ExportMode) -> Self {
        Self {
            mode,
            total_items: 0,
            submitted: 0,
            failed: 0,
            jobs: Vec::new(),
            batch_started: false,
            duration: Duration::from_secs(0),
            errors: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a successful submission
    pub fn add_submitted(&mut self, job: JobId) {
        self.submitted += 1;
        self.jobs.push(job);
    }

    /// Record a direct (queueless) render success
    pub fn add_direct_success(&mut self) {
        self.submitted += 1;
    }

    /// Record a failure
    pub fn add_failure(&mut self, error: ExportError) {
        self.failed += 1;
        self.errors.push(error);
    }

    /// Record an error that is not tied to one item (e.g. the queue flush)
    pub fn add_error(&mut self, error: ExportError) {
        self.errors.push(error);
    }

    /// Check whether the run completed without failures
    pub fn is_successful(&self) -> bool {
        self.failed == 0 && self.errors.is_empty()
    }

    /// One-line outcome for the user
    ///
    /// This is the single status line the panel used to show; everything
    /// else goes to the debug log.
    pub fn status_line(&self) -> String {
        match self.mode {
            ExportMode::Batch => {
                if self.batch_started {
                    format!("Batch started: {}/{}", self.submitted, self.total_items)
                } else {
                    format!(
                        "Batch not started: {}/{} queued",
                        self.submitted, self.total_items
                    )
                }
            }
            ExportMode::SingleFallback => {
                if self.batch_started && self.submitted == 1 {
                    "Export started".to_string()
                } else {
                    "Export failed".to_string()
                }
            }
            ExportMode::Direct => {
                if self.submitted == 1 {
                    "Direct export started".to_string()
                } else {
                    "Direct export failed".to_string()
                }
            }
        }
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            mode = self.mode.as_str(),
            total_items = self.total_items,
            submitted = self.submitted,
            failed = self.failed,
            batch_started = self.batch_started,
            duration_ms = self.duration.as_millis() as u64,
            "Export run completed"
        );

        for error in &self.errors {
            tracing::warn!(
                step = ?error.step,
                message = %error.message,
                context = error.context.as_deref().unwrap_or("-"),
                "Export error"
            );
        }
    }
}

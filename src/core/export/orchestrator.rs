//! Batch export orchestration
//!
//! Drives export of the project-panel selection one sequence at a time.
//! The encoder's render queue is a single shared resource keyed by
//! submission order: items are queued with individual submissions and a
//! single later flush starts everything, so the orchestrator never issues
//! item N+1's calls before item N's pipeline has completed or failed, and
//! never flushes until every submission has been attempted.
//!
//! One item's failure never aborts the batch; failures are counted, logged
//! and reported in the [`BatchSummary`]. When the selection query fails,
//! times out, or reports nothing selected, the run falls back to the
//! single-item active-sequence path.
//!
//! A batch runs to completion once started; there is no mid-batch abort
//! signal. `execute` takes `&self` but a run must own the orchestrator's
//! attention: callers disable their trigger until the returned future
//! resolves.

use crate::adapters::host::{HostBridge, SequenceInfo};
use crate::config::ExportPrefs;
use crate::core::export::planner::ExportPlanner;
use crate::core::export::single::SingleExporter;
use crate::core::export::summary::{BatchSummary, ExportError, ExportMode, ExportStep};
use crate::domain::errors::EncodaError;
use crate::domain::ids::JobId;
use crate::domain::result::Result;
use crate::platform::PlatformDefaults;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Deadline for the initial selection query; the host API can hang
/// indefinitely on one platform, so the query is guarded caller-side.
pub const DEFAULT_SELECTION_TIMEOUT: Duration = Duration::from_secs(3);

/// Batch export orchestrator
pub struct BatchOrchestrator {
    host: Arc<dyn HostBridge>,
    platform: Arc<dyn PlatformDefaults>,
    prefs: ExportPrefs,
    selection_timeout: Duration,
}

impl BatchOrchestrator {
    /// Create a new orchestrator with the default selection timeout
    pub fn new(
        host: Arc<dyn HostBridge>,
        platform: Arc<dyn PlatformDefaults>,
        prefs: ExportPrefs,
    ) -> Self {
        Self {
            host,
            platform,
            prefs,
            selection_timeout: DEFAULT_SELECTION_TIMEOUT,
        }
    }

    /// Override the selection-query deadline
    pub fn with_selection_timeout(mut self, timeout: Duration) -> Self {
        self.selection_timeout = timeout;
        self
    }

    /// Execute one export run
    ///
    /// This is the main entry point. It:
    /// 1. Validates the settings snapshot
    /// 2. Takes the direct path when direct-export mode is on
    /// 3. Queries the selection (with timeout) and batches over it
    /// 4. Falls back to the active-sequence path otherwise
    /// 5. Reports the outcome in a [`BatchSummary`]
    ///
    /// # Errors
    ///
    /// Fails only when the host is unusable for the whole attempt (for the
    /// single-item path: no active sequence). Per-item failures are
    /// recorded in the summary.
    pub async fn execute(&self) -> Result<BatchSummary> {
        let start_time = Instant::now();

        if let Err(e) = self.prefs.validate() {
            let mut summary = BatchSummary::new(ExportMode::Batch);
            summary.add_error(ExportError::new(ExportStep::Configuration, e));
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        let mut summary = if self.prefs.direct_export {
            // Direct mode is incompatible with the shared queue, so the
            // selection is not even consulted.
            tracing::info!("Direct export mode is on, taking the single-item path");
            self.single().execute(true).await?
        } else {
            match self.query_selection().await {
                Some(items) => self.run_batch(items).await,
                None => self.single().execute(false).await?,
            }
        };

        summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    /// Query the project-panel selection, converting every failure mode
    /// into a fallback signal
    ///
    /// Returns `None` when nothing is selected, the call errors, or the
    /// deadline passes. None of those are user-visible errors; they just
    /// route the run to the active-sequence path.
    async fn query_selection(&self) -> Option<Vec<SequenceInfo>> {
        match tokio::time::timeout(self.selection_timeout, self.host.get_selected_sequences())
            .await
        {
            Ok(Ok(items)) if !items.is_empty() => {
                tracing::info!(count = items.len(), "Exporting project-panel selection");
                Some(items)
            }
            Ok(Ok(_)) => {
                tracing::info!("Nothing selected, falling back to the active sequence");
                None
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    error = %e,
                    "Selection query failed, falling back to the active sequence"
                );
                None
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.selection_timeout.as_secs(),
                    "Selection query timed out, falling back to the active sequence"
                );
                None
            }
        }
    }

    /// Run the multi-item batch over `items`, in strict list order
    async fn run_batch(&self, items: Vec<SequenceInfo>) -> BatchSummary {
        let mut summary = BatchSummary::new(ExportMode::Batch);
        summary.total_items = items.len();

        for (index, item) in items.iter().enumerate() {
            tracing::debug!(
                index,
                total = items.len(),
                sequence = %item.name,
                "Processing batch item"
            );

            match self.export_one(item).await {
                Ok(job) => {
                    tracing::info!(sequence = %item.name, job = %job, "Queued for encoding");
                    summary.add_submitted(job);
                }
                Err((step, e)) => {
                    tracing::warn!(
                        sequence = %item.name,
                        step = ?step,
                        error = %e,
                        "Batch item failed, continuing with the rest"
                    );
                    summary.add_failure(
                        ExportError::new(step, e.to_string()).with_context(item.name.as_str()),
                    );
                }
            }
        }

        // Finalize: one flush for everything queued above. Issued exactly
        // once, and only after every item has been attempted — submission
        // order on the host determines render order.
        match self.host.start_encoder_batch().await {
            Ok(()) => {
                tracing::info!(
                    submitted = summary.submitted,
                    "Encoder batch started"
                );
                summary.batch_started = true;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to start the encoder batch");
                summary.add_error(ExportError::new(ExportStep::QueueStart, e.to_string()));
            }
        }

        summary
    }

    /// Full pipeline for one batch item: video check, plan, submit
    ///
    /// The error carries the step it is attributed to so the summary can
    /// say where the item died.
    async fn export_one(
        &self,
        item: &SequenceInfo,
    ) -> std::result::Result<JobId, (ExportStep, EncodaError)> {
        let has_video = self
            .host
            .has_video_for_sequence(&item.name)
            .await
            .map_err(|e| (ExportStep::VideoCheck, e))?;

        let planner = ExportPlanner::new(self.host.as_ref(), self.platform.as_ref(), &self.prefs);
        let plan = planner
            .plan(&item.name, has_video)
            .await
            .map_err(|e| (ExportStep::FolderResolution, e))?;

        self.host
            .export_sequence_by_name(
                &item.name,
                &plan.resolution.full_path,
                &plan.target.preset_path,
            )
            .await
            .map_err(|e| (ExportStep::Submission, e))
    }

    fn single(&self) -> SingleExporter<'_> {
        SingleExporter::new(self.host.as_ref(), self.platform.as_ref(), &self.prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keys;
    use std::collections::BTreeMap;

    fn prefs_from(pairs: &[(&str, &str)]) -> ExportPrefs {
        let store: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ExportPrefs::from_store(&store)
    }

    struct NoHost;

    #[async_trait::async_trait]
    impl HostBridge for NoHost {
        async fn get_selected_sequences(
            &self,
        ) -> Result<Vec<SequenceInfo>> {
            unreachable!("no host call expected")
        }

        async fn has_video_for_sequence(
            &self,
            _name: &crate::domain::SequenceName,
        ) -> Result<bool> {
            unreachable!("no host call expected")
        }

        async fn has_video_tracks(&self) -> Result<bool> {
            unreachable!("no host call expected")
        }

        async fn get_active_sequence(&self) -> Result<crate::domain::SequenceName> {
            unreachable!("no host call expected")
        }

        async fn get_system_info(&self) -> Result<crate::adapters::host::SystemInfo> {
            unreachable!("no host call expected")
        }

        async fn get_project_exports_path(&self, _f: &str, _d: u32) -> Result<String> {
            unreachable!("no host call expected")
        }

        async fn export_sequence_by_name(
            &self,
            _name: &crate::domain::SequenceName,
            _output_path: &std::path::Path,
            _preset_path: &std::path::Path,
        ) -> Result<JobId> {
            unreachable!("no host call expected")
        }

        async fn start_encoder_batch(&self) -> Result<()> {
            unreachable!("no host call expected")
        }

        async fn export_direct(
            &self,
            _output_path: &std::path::Path,
            _preset_path: &std::path::Path,
            _use_in_out: bool,
        ) -> Result<()> {
            unreachable!("no host call expected")
        }

        fn base_url(&self) -> &str {
            "stub://none"
        }
    }

    #[test]
    fn test_default_selection_timeout_is_three_seconds() {
        let orchestrator = BatchOrchestrator::new(
            Arc::new(NoHost),
            Arc::new(crate::platform::NativeDefaults),
            ExportPrefs::default(),
        );

        assert_eq!(orchestrator.selection_timeout, Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_invalid_settings_short_circuit_without_host_calls() {
        let prefs = prefs_from(&[(keys::EXPORT_FOLDER_NAME, "a/b")]);
        let orchestrator = BatchOrchestrator::new(
            Arc::new(NoHost),
            Arc::new(crate::platform::NativeDefaults),
            prefs,
        );

        let summary = orchestrator.execute().await.unwrap();

        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].step, ExportStep::Configuration);
        assert!(!summary.batch_started);
    }
}

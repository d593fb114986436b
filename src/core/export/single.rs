//! Single-item export path
//!
//! Runs when the project-panel selection is empty, unavailable, or timed
//! out, and always when direct-export mode is on. Operates on the host's
//! active sequence, reuses the planner, and submits exactly one encode.
//! Unlike the batch path it starts the encoder queue immediately after its
//! one submission; the direct variant bypasses the queue entirely.

use crate::adapters::host::HostBridge;
use crate::config::ExportPrefs;
use crate::core::export::planner::ExportPlanner;
use crate::core::export::summary::{BatchSummary, ExportError, ExportMode, ExportStep};
use crate::domain::result::Result;
use crate::platform::PlatformDefaults;

/// Exports the active sequence as a one-item run
pub struct SingleExporter<'a> {
    host: &'a dyn HostBridge,
    platform: &'a dyn PlatformDefaults,
    prefs: &'a ExportPrefs,
}

impl<'a> SingleExporter<'a> {
    /// Create a single exporter over the given collaborators
    pub fn new(
        host: &'a dyn HostBridge,
        platform: &'a dyn PlatformDefaults,
        prefs: &'a ExportPrefs,
    ) -> Self {
        Self {
            host,
            platform,
            prefs,
        }
    }

    /// Export the active sequence
    ///
    /// With `direct` set the sequence is rendered in-process in the editor;
    /// otherwise it is queued on the encoder and the queue is started
    /// immediately.
    ///
    /// # Errors
    ///
    /// Fails only when no active sequence can be determined; every later
    /// step failure is recorded in the summary instead.
    pub async fn execute(&self, direct: bool) -> Result<BatchSummary> {
        let mode = if direct {
            ExportMode::Direct
        } else {
            ExportMode::SingleFallback
        };
        let mut summary = BatchSummary::new(mode);
        summary.total_items = 1;

        // Without an active sequence there is nothing to export at all.
        let name = self.host.get_active_sequence().await?;
        tracing::info!(sequence = %name, mode = mode.as_str(), "Exporting active sequence");

        let has_video = match self.host.has_video_tracks().await {
            Ok(has_video) => has_video,
            Err(e) => {
                summary.add_failure(
                    ExportError::new(ExportStep::VideoCheck, e.to_string())
                        .with_context(name.as_str()),
                );
                return Ok(summary);
            }
        };

        let planner = ExportPlanner::new(self.host, self.platform, self.prefs);
        let plan = match planner.plan(&name, has_video).await {
            Ok(plan) => plan,
            Err(e) => {
                summary.add_failure(
                    ExportError::new(ExportStep::FolderResolution, e.to_string())
                        .with_context(name.as_str()),
                );
                return Ok(summary);
            }
        };

        if direct {
            match self
                .host
                .export_direct(
                    &plan.resolution.full_path,
                    &plan.target.preset_path,
                    self.prefs.use_in_out,
                )
                .await
            {
                Ok(()) => {
                    tracing::info!(
                        output = %plan.resolution.full_path.display(),
                        "Direct render started"
                    );
                    summary.add_direct_success();
                }
                Err(e) => {
                    summary.add_failure(
                        ExportError::new(ExportStep::Direct, e.to_string())
                            .with_context(name.as_str()),
                    );
                }
            }
            return Ok(summary);
        }

        match self
            .host
            .export_sequence_by_name(
                &name,
                &plan.resolution.full_path,
                &plan.target.preset_path,
            )
            .await
        {
            Ok(job) => {
                tracing::info!(job = %job, "Queued active sequence");
                summary.add_submitted(job);
            }
            Err(e) => {
                summary.add_failure(
                    ExportError::new(ExportStep::Submission, e.to_string())
                        .with_context(name.as_str()),
                );
                return Ok(summary);
            }
        }

        // One item only, so the queue starts right away.
        match self.host.start_encoder_batch().await {
            Ok(()) => summary.batch_started = true,
            Err(e) => {
                summary.add_error(ExportError::new(ExportStep::QueueStart, e.to_string()));
            }
        }

        Ok(summary)
    }
}

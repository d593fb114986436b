//! Host bridge trait definition
//!
//! This module defines the `HostBridge` trait that abstracts the editor's
//! scripting surface. The production implementation talks JSON over HTTP to
//! the host's scripting gateway; tests substitute scripted doubles.
//!
//! Every call is asynchronous and may fail independently; the export
//! orchestrator decides per call site whether a failure is fatal or just
//! counts against one item.

use crate::domain::ids::{JobId, SequenceName};
use crate::domain::result::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A sequence as listed by the host's project panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SequenceInfo {
    /// Display name shown in the project panel
    pub name: SequenceName,

    /// Host-internal node identifier
    pub node_id: String,
}

impl SequenceInfo {
    /// Create a new sequence descriptor
    pub fn new(name: SequenceName, node_id: impl Into<String>) -> Self {
        Self {
            name,
            node_id: node_id.into(),
        }
    }
}

/// Host environment facts used for path defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemInfo {
    /// True when the host runs on Windows
    pub is_windows: bool,

    /// The user's Downloads folder as the host sees it; may be empty on
    /// hosts that cannot resolve it
    pub downloads_path: String,
}

/// Trait for the editor's scripting surface
///
/// Method-per-operation mirror of the host gateway. Implementations must
/// not retry internally: retry and fallback policy belongs to the caller,
/// which knows whether a failure should abort the run or only one item.
#[async_trait]
pub trait HostBridge: Send + Sync {
    /// List the sequences currently selected in the project panel
    ///
    /// An empty list is a valid response and means nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the host is unreachable, the call is missing on
    /// an older host, or the response cannot be parsed.
    async fn get_selected_sequences(&self) -> Result<Vec<SequenceInfo>>;

    /// Whether the named sequence has visible video content
    ///
    /// A track counts only if it has clips and is not muted.
    async fn has_video_for_sequence(&self, name: &SequenceName) -> Result<bool>;

    /// Whether the active sequence has visible video content
    async fn has_video_tracks(&self) -> Result<bool>;

    /// Name of the sequence currently open in the timeline
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::HostError::NoActiveSequence`] when no
    /// sequence is open.
    async fn get_active_sequence(&self) -> Result<SequenceName>;

    /// Host environment facts (OS family, Downloads folder)
    async fn get_system_info(&self) -> Result<SystemInfo>;

    /// Absolute path of the project-relative export folder
    ///
    /// `folder_name` is created `depth` levels above the project file; the
    /// host creates the folder if it is missing.
    async fn get_project_exports_path(&self, folder_name: &str, depth: u32) -> Result<String>;

    /// Queue one sequence on the external encoder WITHOUT starting the queue
    ///
    /// Submissions accumulate on the host side in call order; a later
    /// [`HostBridge::start_encoder_batch`] flushes all of them at once.
    async fn export_sequence_by_name(
        &self,
        name: &SequenceName,
        output_path: &Path,
        preset_path: &Path,
    ) -> Result<JobId>;

    /// Start everything queued on the external encoder
    async fn start_encoder_batch(&self) -> Result<()>;

    /// Render the active sequence in-process in the editor
    ///
    /// Bypasses the shared encoder queue entirely. Unlike the queue-based
    /// path the in-process render does not infer the container from the
    /// preset, so `output_path` must already carry its extension.
    async fn export_direct(
        &self,
        output_path: &Path,
        preset_path: &Path,
        use_in_out: bool,
    ) -> Result<()>;

    /// Base URL of the host gateway, for diagnostics
    fn base_url(&self) -> &str;
}

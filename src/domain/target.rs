//! Export target model
//!
//! Types describing a single sequence export: where it goes, which preset
//! encodes it, and which version number its filename carries. Targets are
//! built fresh per export attempt from current settings and host query
//! results; they are never persisted.

use crate::domain::ids::SequenceName;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Fully resolved parameters for one sequence export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportTarget {
    /// Sequence display name as reported by the host
    pub sequence_name: SequenceName,

    /// Display name with filename-invalid characters replaced by `_`
    pub clean_name: String,

    /// Absolute output folder, OS-native separators
    pub folder_path: PathBuf,

    /// Absolute path to the encoder preset file
    pub preset_path: PathBuf,

    /// Whether the sequence has at least one unmuted video track with clips
    pub has_video: bool,

    /// Container extension, without the leading dot
    pub extension: String,
}

impl ExportTarget {
    /// Create a new export target
    ///
    /// `clean_name` is derived from the sequence name; callers never supply
    /// it separately, which keeps the two from drifting apart.
    pub fn new(
        sequence_name: SequenceName,
        folder_path: PathBuf,
        preset_path: PathBuf,
        has_video: bool,
        extension: impl Into<String>,
    ) -> Self {
        let clean_name = sequence_name.clean();
        Self {
            sequence_name,
            clean_name,
            folder_path,
            preset_path,
            has_video,
            extension: extension.into(),
        }
    }
}

/// Outcome of resolving the next free version for a target
///
/// Produced by the export planner from the directory scan plus the rendered
/// naming pattern, and consumed immediately to submit the encode request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionResolution {
    /// Version number, >= 1
    pub version: u32,

    /// Final filename including extension
    pub filename: String,

    /// Folder joined with filename
    pub full_path: PathBuf,
}

impl VersionResolution {
    /// Create a new version resolution
    pub fn new(version: u32, filename: impl Into<String>, folder: &Path) -> Self {
        let filename = filename.into();
        let full_path = folder.join(&filename);
        Self {
            version,
            filename,
            full_path,
        }
    }
}

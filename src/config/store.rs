//! Flat settings store and typed export preferences
//!
//! The editor panel this tool replaces persisted its settings as a flat
//! string-to-string map, with booleans stored as `"true"`/`"false"`. That
//! model is kept: a [`SettingsStore`] hands out raw string values, and
//! [`ExportPrefs`] is the typed snapshot taken from the store at the start
//! of each export action. Core logic only ever sees the snapshot, so it is
//! testable without a real settings file.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Well-known settings keys
pub mod keys {
    /// Absolute path to the encoder preset used for sequences with video
    pub const VIDEO_PRESET_PATH: &str = "video_preset_path";
    /// Absolute path to the encoder preset used for audio-only sequences
    pub const AUDIO_PRESET_PATH: &str = "audio_preset_path";
    /// Filename token pattern
    pub const NAMING_PATTERN: &str = "naming_pattern";
    /// Name of the project-relative export folder
    pub const EXPORT_FOLDER_NAME: &str = "export_folder_name";
    /// How many levels above the project file the export folder sits
    pub const FOLDER_DEPTH: &str = "folder_depth";
    /// Fixed output folder used when `use_fixed_folder` is on
    pub const FIXED_FOLDER: &str = "fixed_folder";
    /// `"true"` to export into the fixed folder (or Downloads when blank)
    pub const USE_FIXED_FOLDER: &str = "use_fixed_folder";
    /// `"true"` to bound exports to the sequence in/out range
    pub const USE_IN_OUT: &str = "use_in_out";
    /// `"true"` to render in-process in the editor, bypassing the queue
    pub const DIRECT_EXPORT: &str = "direct_export";
}

/// Default naming pattern when the store has none
pub const DEFAULT_NAMING_PATTERN: &str = "{SEQ}_V{V}";

/// Default export folder name when the store has none
pub const DEFAULT_EXPORT_FOLDER_NAME: &str = "EXPORTS";

/// Read access to the flat settings map
///
/// Core logic never mutates settings; writes happen through the
/// configuration file only.
pub trait SettingsStore: Send + Sync {
    /// Raw string value for `key`, if present
    fn get(&self, key: &str) -> Option<String>;
}

impl SettingsStore for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

/// Typed snapshot of the export settings
///
/// Taken once per export action; later store changes do not affect a
/// running batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPrefs {
    /// Preset for sequences with visible video content, if configured
    pub video_preset_path: Option<PathBuf>,

    /// Preset for audio-only sequences, if configured
    pub audio_preset_path: Option<PathBuf>,

    /// Filename token pattern
    pub naming_pattern: String,

    /// Project-relative export folder name
    pub folder_name: String,

    /// Levels above the project file where the export folder is created
    pub folder_depth: u32,

    /// Fixed output folder, if configured
    pub fixed_folder: Option<PathBuf>,

    /// Export into the fixed folder (or Downloads) instead of the project tree
    pub use_fixed_folder: bool,

    /// Bound exports to the in/out range
    pub use_in_out: bool,

    /// Render in-process in the editor, bypassing the shared queue
    pub direct_export: bool,
}

impl ExportPrefs {
    /// Build a snapshot from the flat store, applying defaults
    ///
    /// Missing keys fall back to their defaults; malformed numeric values
    /// are logged and defaulted rather than failing the export action.
    pub fn from_store(store: &dyn SettingsStore) -> Self {
        let non_empty_path = |key: &str| -> Option<PathBuf> {
            store
                .get(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };

        let folder_depth = match store.get(keys::FOLDER_DEPTH) {
            None => 0,
            Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Malformed folder depth setting, using 0");
                0
            }),
        };

        Self {
            video_preset_path: non_empty_path(keys::VIDEO_PRESET_PATH),
            audio_preset_path: non_empty_path(keys::AUDIO_PRESET_PATH),
            naming_pattern: store
                .get(keys::NAMING_PATTERN)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_NAMING_PATTERN.to_string()),
            folder_name: store
                .get(keys::EXPORT_FOLDER_NAME)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EXPORT_FOLDER_NAME.to_string()),
            folder_depth,
            fixed_folder: non_empty_path(keys::FIXED_FOLDER),
            use_fixed_folder: flag(store, keys::USE_FIXED_FOLDER),
            use_in_out: flag(store, keys::USE_IN_OUT),
            direct_export: flag(store, keys::DIRECT_EXPORT),
        }
    }

    /// Validate the snapshot
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.naming_pattern.trim().is_empty() {
            return Err("naming_pattern cannot be empty".to_string());
        }
        if self.folder_name.trim().is_empty() {
            return Err("export_folder_name cannot be empty".to_string());
        }
        if self.folder_name.contains(['/', '\\']) {
            return Err(format!(
                "export_folder_name '{}' must be a single folder name, not a path",
                self.folder_name
            ));
        }
        if self.folder_depth > 8 {
            return Err(format!(
                "folder_depth {} is out of range (0-8)",
                self.folder_depth
            ));
        }
        Ok(())
    }
}

impl Default for ExportPrefs {
    fn default() -> Self {
        Self::from_store(&BTreeMap::<String, String>::new())
    }
}

/// Parse a persisted `"true"`/`"false"` flag; anything else is false
fn flag(store: &dyn SettingsStore, key: &str) -> bool {
    store
        .get(key)
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

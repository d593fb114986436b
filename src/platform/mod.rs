//! Platform default lookups
//!
//! Built-in encoder preset locations and the Downloads folder are
//! environmental facts, not logic. They sit behind a trait so the export
//! planner can be tested with fixed paths on any machine.

use std::path::PathBuf;

/// Environmental defaults injected into the export planner
pub trait PlatformDefaults: Send + Sync {
    /// Built-in encoder preset for sequences with video
    fn default_video_preset(&self) -> PathBuf;

    /// Built-in encoder preset for audio-only sequences
    fn default_audio_preset(&self) -> PathBuf;

    /// The local user's Downloads folder, if resolvable
    fn downloads_dir(&self) -> Option<PathBuf>;
}

/// Defaults for the machine the exporter runs on
///
/// Preset paths point at the encoder's system preset install locations;
/// the Downloads folder comes from the OS user directories.
#[derive(Debug, Clone, Default)]
pub struct NativeDefaults;

impl PlatformDefaults for NativeDefaults {
    #[cfg(windows)]
    fn default_video_preset(&self) -> PathBuf {
        PathBuf::from(
            r"C:\Program Files\Adobe\Adobe Media Encoder 2025\MediaIO\systempresets\58444341_4d584656\HighQuality1080HD.epr",
        )
    }

    #[cfg(not(windows))]
    fn default_video_preset(&self) -> PathBuf {
        PathBuf::from(
            "/Applications/Adobe Media Encoder 2025/Adobe Media Encoder 2025.app/Contents/MediaIO/systempresets/58444341_4d584656/HighQuality1080HD.epr",
        )
    }

    #[cfg(windows)]
    fn default_audio_preset(&self) -> PathBuf {
        PathBuf::from(
            r"C:\Program Files\Adobe\Adobe Media Encoder 2025\MediaIO\systempresets\57617645_57617645\WAV48kHz16bit.epr",
        )
    }

    #[cfg(not(windows))]
    fn default_audio_preset(&self) -> PathBuf {
        PathBuf::from(
            "/Applications/Adobe Media Encoder 2025/Adobe Media Encoder 2025.app/Contents/MediaIO/systempresets/57617645_57617645/WAV48kHz16bit.epr",
        )
    }

    fn downloads_dir(&self) -> Option<PathBuf> {
        dirs::download_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_defaults_point_at_preset_files() {
        let defaults = NativeDefaults;

        assert!(defaults
            .default_video_preset()
            .extension()
            .is_some_and(|e| e == "epr"));
        assert!(defaults
            .default_audio_preset()
            .extension()
            .is_some_and(|e| e == "epr"));
    }

    #[test]
    fn test_video_and_audio_presets_differ() {
        let defaults = NativeDefaults;
        assert_ne!(defaults.default_video_preset(), defaults.default_audio_preset());
    }
}

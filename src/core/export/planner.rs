//! Per-item export parameter resolution
//!
//! Turns a sequence name plus the current settings snapshot into everything
//! an encode submission needs: preset, output folder, version number, final
//! filename. One plan per item, computed fresh so a batch picks up files
//! written moments earlier by its own previous items.

use crate::adapters::host::HostBridge;
use crate::config::ExportPrefs;
use crate::core::export::extension::infer_extension;
use crate::core::naming::pattern::render_pattern;
use crate::core::naming::resolver::resolve_next_version;
use crate::domain::errors::EncodaError;
use crate::domain::ids::SequenceName;
use crate::domain::result::Result;
use crate::domain::target::{ExportTarget, VersionResolution};
use crate::platform::PlatformDefaults;
use std::path::PathBuf;

/// A fully planned export for one sequence
#[derive(Debug, Clone)]
pub struct PlannedExport {
    /// Resolved target parameters
    pub target: ExportTarget,

    /// Version number and final output path
    pub resolution: VersionResolution,
}

/// Resolves export parameters for single items
pub struct ExportPlanner<'a> {
    host: &'a dyn HostBridge,
    platform: &'a dyn PlatformDefaults,
    prefs: &'a ExportPrefs,
}

impl<'a> ExportPlanner<'a> {
    /// Create a planner over the given collaborators
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

    /// Pick the encoder preset for an item
    ///
    /// The configured video or audio preset, or the platform's built-in
    /// default when the corresponding setting is blank.
    pub fn select_preset(&self, has_video: bool) -> PathBuf {
        if has_video {
            self.prefs
                .video_preset_path
                .clone()
                .unwrap_or_else(|| self.platform.default_video_preset())
        } else {
            self.prefs
                .audio_preset_path
                .clone()
                .unwrap_or_else(|| self.platform.default_audio_preset())
        }
    }

    /// Resolve the output folder for this run's settings
    ///
    /// Fixed-location mode uses the configured folder, then the host's
    /// Downloads path, then the local Downloads lookup. Project mode asks
    /// the host for the export folder relative to the project file.
    pub async fn resolve_folder(&self) -> Result<PathBuf> {
        if self.prefs.use_fixed_folder {
            if let Some(fixed) = &self.prefs.fixed_folder {
                return Ok(fixed.clone());
            }

            match self.host.get_system_info().await {
                Ok(info) if !info.downloads_path.trim().is_empty() => {
                    return Ok(PathBuf::from(info.downloads_path));
                }
                Ok(_) => {
                    tracing::debug!("Host reported no Downloads path, trying local lookup");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "getSystemInfo failed, trying local Downloads lookup");
                }
            }

            return self.platform.downloads_dir().ok_or_else(|| {
                EncodaError::Export(
                    "No fixed folder configured and no Downloads folder could be resolved"
                        .to_string(),
                )
            });
        }

        let path = self
            .host
            .get_project_exports_path(&self.prefs.folder_name, self.prefs.folder_depth)
            .await?;
        Ok(PathBuf::from(path))
    }

    /// Plan one export
    ///
    /// Version-resolution failures are not fatal: the scan falls back to
    /// version 1 so a single unreadable folder cannot sink the item.
    pub async fn plan(&self, name: &SequenceName, has_video: bool) -> Result<PlannedExport> {
        let folder = self.resolve_folder().await?;
        let preset = self.select_preset(has_video);
        let extension = infer_extension(&preset, has_video);
        let clean_name = name.clean();

        let version = match resolve_next_version(&folder, &clean_name) {
            Ok(version) => version,
            Err(e) => {
                tracing::warn!(
                    sequence = %name,
                    error = %e,
                    "Version scan failed, falling back to version 1"
                );
                1
            }
        };

        let stem = render_pattern(&self.prefs.naming_pattern, version, &clean_name);
        let filename = format!("{stem}.{extension}");
        let resolution = VersionResolution::new(version, filename, &folder);

        tracing::debug!(
            sequence = %name,
            version,
            output = %resolution.full_path.display(),
            preset = %preset.display(),
            "Planned export"
        );

        let target = ExportTarget::new(name.clone(), folder, preset, has_video, extension);
        Ok(PlannedExport { target, resolution })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::host::{SequenceInfo, SystemInfo};
    use crate::config::keys;
    use crate::domain::ids::JobId;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::path::Path;
    use std::str::FromStr;

    struct StubHost {
        exports_path: Option<String>,
        downloads_path: String,
    }

    #[async_trait]
    impl HostBridge for StubHost {
        async fn get_selected_sequences(&self) -> Result<Vec<SequenceInfo>> {
            Ok(Vec::new())
        }

        async fn has_video_for_sequence(&self, _name: &SequenceName) -> Result<bool> {
            Ok(true)
        }

        async fn has_video_tracks(&self) -> Result<bool> {
            Ok(true)
        }

        async fn get_active_sequence(&self) -> Result<SequenceName> {
            Ok(SequenceName::from_str("Edit").unwrap())
        }

        async fn get_system_info(&self) -> Result<SystemInfo> {
            Ok(SystemInfo {
                is_windows: false,
                downloads_path: self.downloads_path.clone(),
            })
        }

        async fn get_project_exports_path(&self, _folder: &str, _depth: u32) -> Result<String> {
            self.exports_path
                .clone()
                .ok_or_else(|| EncodaError::Export("no project open".to_string()))
        }

        async fn export_sequence_by_name(
            &self,
            _name: &SequenceName,
            _output_path: &Path,
            _preset_path: &Path,
        ) -> Result<JobId> {
            Ok(JobId::from_str("job-1").unwrap())
        }

        async fn start_encoder_batch(&self) -> Result<()> {
            Ok(())
        }

        async fn export_direct(
            &self,
            _output_path: &Path,
            _preset_path: &Path,
            _use_in_out: bool,
        ) -> Result<()> {
            Ok(())
        }

        fn base_url(&self) -> &str {
            "stub://host"
        }
    }

    struct FixedDefaults {
        downloads: Option<PathBuf>,
    }

    impl PlatformDefaults for FixedDefaults {
        fn default_video_preset(&self) -> PathBuf {
            PathBuf::from("/builtin/video.epr")
        }

        fn default_audio_preset(&self) -> PathBuf {
            PathBuf::from("/builtin/audio.epr")
        }

        fn downloads_dir(&self) -> Option<PathBuf> {
            self.downloads.clone()
        }
    }

    fn prefs_from(pairs: &[(&str, &str)]) -> ExportPrefs {
        let store: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ExportPrefs::from_store(&store)
    }

    fn host_with_exports(path: &str) -> StubHost {
        StubHost {
            exports_path: Some(path.to_string()),
            downloads_path: String::new(),
        }
    }

    #[tokio::test]
    async fn test_select_preset_prefers_configured_paths() {
        let prefs = prefs_from(&[
            (keys::VIDEO_PRESET_PATH, "/custom/h264.epr"),
            (keys::AUDIO_PRESET_PATH, "/custom/wav.epr"),
        ]);
        let host = host_with_exports("/proj/EXPORTS");
        let platform = FixedDefaults { downloads: None };
        let planner = ExportPlanner::new(&host, &platform, &prefs);

        assert_eq!(planner.select_preset(true), PathBuf::from("/custom/h264.epr"));
        assert_eq!(planner.select_preset(false), PathBuf::from("/custom/wav.epr"));
    }

    #[tokio::test]
    async fn test_select_preset_falls_back_to_builtin() {
        let prefs = prefs_from(&[]);
        let host = host_with_exports("/proj/EXPORTS");
        let platform = FixedDefaults { downloads: None };
        let planner = ExportPlanner::new(&host, &platform, &prefs);

        assert_eq!(planner.select_preset(true), PathBuf::from("/builtin/video.epr"));
        assert_eq!(planner.select_preset(false), PathBuf::from("/builtin/audio.epr"));
    }

    #[tokio::test]
    async fn test_resolve_folder_project_mode() {
        let prefs = prefs_from(&[]);
        let host = host_with_exports("/proj/EXPORTS");
        let platform = FixedDefaults { downloads: None };
        let planner = ExportPlanner::new(&host, &platform, &prefs);

        assert_eq!(
            planner.resolve_folder().await.unwrap(),
            PathBuf::from("/proj/EXPORTS")
        );
    }

    #[tokio::test]
    async fn test_resolve_folder_fixed_mode_uses_configured_folder() {
        let prefs = prefs_from(&[
            (keys::USE_FIXED_FOLDER, "true"),
            (keys::FIXED_FOLDER, "/delivery/out"),
        ]);
        let host = host_with_exports("/proj/EXPORTS");
        let platform = FixedDefaults { downloads: None };
        let planner = ExportPlanner::new(&host, &platform, &prefs);

        assert_eq!(
            planner.resolve_folder().await.unwrap(),
            PathBuf::from("/delivery/out")
        );
    }

    #[tokio::test]
    async fn test_resolve_folder_blank_fixed_folder_uses_host_downloads() {
        let prefs = prefs_from(&[(keys::USE_FIXED_FOLDER, "true")]);
        let host = StubHost {
            exports_path: None,
            downloads_path: "/home/ed/Downloads".to_string(),
        };
        let platform = FixedDefaults { downloads: None };
        let planner = ExportPlanner::new(&host, &platform, &prefs);

        assert_eq!(
            planner.resolve_folder().await.unwrap(),
            PathBuf::from("/home/ed/Downloads")
        );
    }

    #[tokio::test]
    async fn test_resolve_folder_blank_host_downloads_uses_local_lookup() {
        let prefs = prefs_from(&[(keys::USE_FIXED_FOLDER, "true")]);
        let host = StubHost {
            exports_path: None,
            downloads_path: String::new(),
        };
        let platform = FixedDefaults {
            downloads: Some(PathBuf::from("/local/Downloads")),
        };
        let planner = ExportPlanner::new(&host, &platform, &prefs);

        assert_eq!(
            planner.resolve_folder().await.unwrap(),
            PathBuf::from("/local/Downloads")
        );
    }

    #[tokio::test]
    async fn test_plan_renders_versioned_filename() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::File::create(dir.path().join("Edit_V1.mp4")).unwrap();
        std::fs::File::create(dir.path().join("Edit_V4.mp4")).unwrap();

        let prefs = prefs_from(&[
            (keys::NAMING_PATTERN, "{SEQ}_V{VV}"),
            (keys::VIDEO_PRESET_PATH, "/custom/YouTube 1080p.epr"),
        ]);
        let host = host_with_exports(&dir.path().to_string_lossy());
        let platform = FixedDefaults { downloads: None };
        let planner = ExportPlanner::new(&host, &platform, &prefs);

        let plan = planner
            .plan(&SequenceName::from_str("Edit").unwrap(), true)
            .await
            .unwrap();

        assert_eq!(plan.resolution.version, 5);
        assert_eq!(plan.resolution.filename, "Edit_V05.mp4");
        assert_eq!(plan.resolution.full_path, dir.path().join("Edit_V05.mp4"));
        assert_eq!(plan.target.extension, "mp4");
    }

    #[tokio::test]
    async fn test_plan_sanitizes_sequence_name() {
        let dir = tempfile::tempdir().unwrap();

        let prefs = prefs_from(&[(keys::AUDIO_PRESET_PATH, "/custom/WAV 48k.epr")]);
        let host = host_with_exports(&dir.path().to_string_lossy());
        let platform = FixedDefaults { downloads: None };
        let planner = ExportPlanner::new(&host, &platform, &prefs);

        let plan = planner
            .plan(&SequenceName::from_str("My:Seq/Test").unwrap(), false)
            .await
            .unwrap();

        assert_eq!(plan.target.clean_name, "My_Seq_Test");
        assert_eq!(plan.resolution.filename, "My_Seq_Test_V1.wav");
    }

    #[tokio::test]
    async fn test_plan_folder_failure_is_fatal_for_the_item() {
        let prefs = prefs_from(&[]);
        let host = StubHost {
            exports_path: None,
            downloads_path: String::new(),
        };
        let platform = FixedDefaults { downloads: None };
        let planner = ExportPlanner::new(&host, &platform, &prefs);

        let result = planner.plan(&SequenceName::from_str("Edit").unwrap(), true).await;
        assert!(result.is_err());
    }
}

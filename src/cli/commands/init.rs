//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "encoda.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_default_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Point host.base_url at your editor's scripting gateway");
                println!("  2. Set preset paths under [settings], or leave them blank");
                println!("     to use the encoder's built-in defaults");
                println!("  3. Validate: encoda validate-config");
                println!("  4. Export: encoda export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the default configuration file contents
    fn generate_default_config() -> String {
        r#"# Encoda Configuration File
# Batch export bridge between a timeline editor and an external encoder

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

[host]
# The editor's scripting gateway
base_url = "http://127.0.0.1:8089"
# Per-request deadline; 0 disables it
request_timeout_secs = 30
# Deadline for the selection query before falling back to the active sequence
selection_timeout_secs = 3

[logging]
# Append-only JSON debug log; rotated files are kept, never cleared
file_enabled = false
file_path = "./logs"
file_rotation = "daily"

# Flat export settings, all values are strings.
# Booleans are persisted as "true"/"false".
[settings]
# Encoder preset for sequences with video; blank uses the built-in default
video_preset_path = ""
# Encoder preset for audio-only sequences; blank uses the built-in default
audio_preset_path = ""
# Filename tokens: {SEQ} name, {V}/{VV}/{VVV} version, {DATE}, {TIME}
naming_pattern = "{SEQ}_V{V}"
# Project-relative export folder
export_folder_name = "EXPORTS"
# How many levels above the project file the export folder sits
folder_depth = "0"
# Export to a fixed folder instead of the project tree
use_fixed_folder = "false"
# The fixed folder; blank means the Downloads folder
fixed_folder = ""
# Export only the sequence's in/out range
use_in_out = "false"
# Render in-process in the editor, bypassing the encoder queue
direct_export = "false"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EncodaConfig;

    #[test]
    fn test_generated_config_parses_and_validates() {
        let contents = InitArgs::generate_default_config();
        let config: EncodaConfig = toml::from_str(&contents).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(
            config.settings.get("naming_pattern"),
            Some(&"{SEQ}_V{V}".to_string())
        );
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("encoda.toml");
        std::fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().into_owned(),
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# existing");
    }

    #[tokio::test]
    async fn test_init_writes_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("encoda.toml");

        let args = InitArgs {
            output: path.to_string_lossy().into_owned(),
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(path.exists());
    }
}

//! Integration tests for configuration loading
//!
//! Full-file round trips: TOML on disk through the loader into the typed
//! settings snapshot the export core consumes.

use encoda::config::{load_config, ExportPrefs};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn full_config_round_trips_into_prefs() {
    let file = write_config(
        r#"
        [application]
        log_level = "debug"

        [host]
        base_url = "http://127.0.0.1:9000"
        request_timeout_secs = 10
        selection_timeout_secs = 5

        [logging]
        file_enabled = false

        [settings]
        video_preset_path = "/presets/YouTube 4K.epr"
        audio_preset_path = "/presets/WAV 48k.epr"
        naming_pattern = "{SEQ}_{DATE}_V{VV}"
        export_folder_name = "RENDERS"
        folder_depth = "2"
        use_fixed_folder = "true"
        fixed_folder = "/delivery"
        use_in_out = "true"
        direct_export = "false"
    "#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.host.selection_timeout_secs, 5);

    let prefs = ExportPrefs::from_store(&config.settings);
    assert_eq!(
        prefs.video_preset_path,
        Some(PathBuf::from("/presets/YouTube 4K.epr"))
    );
    assert_eq!(prefs.naming_pattern, "{SEQ}_{DATE}_V{VV}");
    assert_eq!(prefs.folder_name, "RENDERS");
    assert_eq!(prefs.folder_depth, 2);
    assert_eq!(prefs.fixed_folder, Some(PathBuf::from("/delivery")));
    assert!(prefs.use_fixed_folder);
    assert!(prefs.use_in_out);
    assert!(!prefs.direct_export);
    assert!(prefs.validate().is_ok());
}

#[test]
fn omitted_settings_fall_back_to_defaults() {
    let file = write_config(
        r#"
        [host]
        base_url = "http://127.0.0.1:8089"
    "#,
    );

    let config = load_config(file.path()).unwrap();
    let prefs = ExportPrefs::from_store(&config.settings);

    assert_eq!(prefs.naming_pattern, "{SEQ}_V{V}");
    assert_eq!(prefs.folder_name, "EXPORTS");
    assert_eq!(prefs.folder_depth, 0);
    assert!(!prefs.use_fixed_folder);
}

#[test]
fn invalid_settings_fail_validation_at_load_time() {
    let file = write_config(
        r#"
        [host]
        base_url = "http://127.0.0.1:8089"

        [settings]
        export_folder_name = "nested/path"
    "#,
    );

    assert!(load_config(file.path()).is_err());
}

#[test]
fn unknown_settings_keys_are_preserved_not_rejected() {
    // The settings table is a free-form string map; keys this build does
    // not understand must survive a load so older/newer builds can share a
    // config file.
    let file = write_config(
        r#"
        [host]
        base_url = "http://127.0.0.1:8089"

        [settings]
        some_future_toggle = "true"
    "#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config.settings.get("some_future_toggle"),
        Some(&"true".to_string())
    );

    // And the snapshot still sees its own keys with defaults.
    let prefs = ExportPrefs::from_store(&config.settings);
    assert_eq!(prefs.naming_pattern, "{SEQ}_V{V}");
}

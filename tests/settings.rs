use randomizer::settings::{settings_path, Settings, SETTINGS_ENV};
use serial_test::serial;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let settings = Settings::load(dir.path().join("nope.json")).unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.main_window_placement.is_none());
    assert!(settings.keep_on_top);
    assert!(settings.show_in_taskbar);
}

#[test]
fn empty_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "").unwrap();
    assert_eq!(Settings::load(&path).unwrap(), Settings::default());
}

#[test]
fn missing_keys_take_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "keep_on_top": false }"#).unwrap();

    let settings = Settings::load(&path).unwrap();
    assert!(!settings.keep_on_top);
    assert!(settings.show_in_taskbar);
    assert!(!settings.debug_logging);
    assert_eq!(settings.window_size, (160, 120));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(Settings::load(&path).is_err());
}

#[test]
fn save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let settings = Settings {
        main_window_placement: Some("<WINDOWPLACEMENT/>".into()),
        keep_on_top: false,
        show_in_taskbar: false,
        debug_logging: true,
        log_file: Some("randomizer.log".into()),
        window_size: (200, 150),
    };

    settings.save(&path).unwrap();
    assert_eq!(Settings::load(&path).unwrap(), settings);
}

#[test]
fn log_path_ignores_blank_values() {
    let mut settings = Settings::default();
    assert_eq!(settings.log_path(), None);
    settings.log_file = Some("  ".into());
    assert_eq!(settings.log_path(), None);
    settings.log_file = Some("logs/app.log".into());
    assert_eq!(settings.log_path(), Some(PathBuf::from("logs/app.log")));
}

#[test]
#[serial]
fn env_var_overrides_settings_path() {
    std::env::set_var(SETTINGS_ENV, "/tmp/randomizer-test/settings.json");
    assert_eq!(
        settings_path(),
        PathBuf::from("/tmp/randomizer-test/settings.json")
    );
    std::env::remove_var(SETTINGS_ENV);
    assert!(settings_path().ends_with("settings.json"));
}

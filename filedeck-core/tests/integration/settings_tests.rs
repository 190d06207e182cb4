//! Integration tests for settings files
//!
//! These tests write settings to a temporary directory and load them back.

use std::fs;

use filedeck_core::{ConfigError, SeedTree, Settings, Workspace};
use tempfile::TempDir;

#[test]
fn test_load_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("filedeck.toml");
    fs::write(
        &path,
        r#"
[logging]
level = "debug"

[workspace]
seed = "empty"

[editor]
placeholder = "// nothing open"
"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.workspace.seed, SeedTree::Empty);

    let workspace = Workspace::from_settings(&settings);
    assert!(workspace.tree().is_empty());
    assert_eq!(workspace.active_content(), "// nothing open");
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(matches!(Settings::load(&path), Err(ConfigError::NotFound(_))));
    assert_eq!(Settings::load_or_default(&path).unwrap(), Settings::default());
}

#[test]
fn test_invalid_file_is_reported_not_defaulted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[logging]\nlevel = \"chatty\"\n").unwrap();

    assert!(matches!(
        Settings::load_or_default(&path),
        Err(ConfigError::Validation { .. })
    ));
}

#[test]
fn test_saved_settings_load_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");

    let mut settings = Settings::default();
    settings.logging.level = "trace".to_string();
    settings.logging.log_file = Some(dir.path().join("filedeck.log"));
    fs::write(&path, settings.to_toml_string().unwrap()).unwrap();

    assert_eq!(Settings::load(&path).unwrap(), settings);
}

#[test]
fn test_default_settings_seed_sample_workspace() {
    let workspace = Workspace::from_settings(&Settings::default());
    assert_eq!(workspace.tree().len(), 4);
    assert!(workspace.active_file().is_none());
}

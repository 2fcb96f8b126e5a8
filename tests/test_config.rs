use nsdebug::config::{ColorMode, ConfigError, Settings, load_settings, load_settings_from_path};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_settings(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write settings");
    file
}

#[test]
fn test_no_path_gives_defaults() {
    let settings = load_settings(None).expect("defaults");
    assert_eq!(settings, Settings::default());
    assert!(settings.debug.is_empty());
    assert_eq!(settings.color, ColorMode::Auto);
}

#[test]
fn test_full_settings_file() {
    let file = write_settings(
        r#"
debug = "app:*,-app:secret"
color = "always"
styled = true
panic_throws = true
"#,
    );
    let settings = load_settings_from_path(file.path()).expect("parse settings");
    assert_eq!(settings.debug, "app:*,-app:secret");
    assert_eq!(settings.color, ColorMode::Always);
    assert!(settings.styled);
    assert!(settings.panic_throws);
}

#[test]
fn test_partial_settings_file_keeps_defaults() {
    let file = write_settings("debug = \"db\"\n");
    let settings = load_settings(Some(file.path())).expect("parse settings");
    assert_eq!(settings.debug, "db");
    assert_eq!(settings.color, ColorMode::Auto);
    assert!(!settings.panic_throws);
}

#[test]
fn test_environment_overrides_file() {
    let file = write_settings("debug = \"db\"\ncolor = \"always\"\n");
    let settings = load_settings(Some(file.path()))
        .expect("parse settings")
        .with_env(|name| match name {
            "DEBUG" => Some("server:*".to_string()),
            "NO_COLOR" => Some("1".to_string()),
            _ => None,
        });
    assert_eq!(settings.debug, "server:*");
    assert_eq!(settings.color, ColorMode::Never);
}

#[test]
fn test_invalid_toml_reports_path() {
    let file = write_settings("color = \"sometimes\"\n");
    let err = load_settings_from_path(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_missing_file_reports_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");
    let err = load_settings_from_path(&missing).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

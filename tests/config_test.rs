// tests/config_test.rs
use semver_bump::config::{load_config, Config, OutputFormat};
use semver_bump::SuffixPolicy;
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[output]
format = "text"
indent = 4

[bump]
clear_suffixes = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.output.indent, 4);
    assert_eq!(config.bump.suffix_policy(), SuffixPolicy::Clear);
}

#[test]
fn test_empty_file_uses_defaults() {
    let temp_file = NamedTempFile::new().unwrap();
    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_missing_explicit_path_is_error() {
    let err = load_config(Some("/nonexistent/semver.toml")).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}

#[test]
fn test_malformed_file_is_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[bump]\nclear_suffixes = \"yes\"\n").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_local_config_discovered_in_current_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("semver.toml"), "[output]\nformat = \"text\"\n").unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(original).unwrap();

    assert_eq!(result.unwrap().output.format, OutputFormat::Text);
}

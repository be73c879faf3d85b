//! Configuration loading and precedence tests

use ark_config::{CollectionsSettings, ConfigError, ConfigLoader, ProjectConfig};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
    path.to_path_buf()
}

/// Loader whose global config lives inside the temp dir
fn loader_with_global(dir: &TempDir, global: Option<&str>) -> ConfigLoader {
    let global_path = dir.path().join("home").join(".ark").join("config.toml");
    if let Some(content) = global {
        write_file(&global_path, content);
    }
    ConfigLoader::with_global_config_path(global_path)
}

// ============================================================================
// Precedence
// ============================================================================

#[test]
#[serial]
fn test_global_defaults_apply_without_project() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = temp_dir.path().join("work");
    fs::create_dir_all(&project_dir).unwrap();

    let mut loader = loader_with_global(
        &temp_dir,
        Some(
            r#"
[collections]
initial_capacity = 8

[logging]
level = "debug"
"#,
        ),
    );
    let config = loader.load_from_directory(&project_dir).unwrap();

    assert!(!config.is_project());
    assert_eq!(config.collections().initial_capacity, Some(8));
    assert_eq!(config.log_level(), "debug");
}

#[test]
#[serial]
fn test_project_overrides_global() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = temp_dir.path().join("work");
    write_file(
        &project_dir.join("ark.toml"),
        r#"
[collections]
initial_capacity = 256

[logging]
level = "error"
"#,
    );

    let mut loader = loader_with_global(
        &temp_dir,
        Some(
            r#"
[collections]
initial_capacity = 8
max_load_factor = 0.6
"#,
        ),
    );
    let config = loader.load_from_directory(&project_dir).unwrap();

    assert_eq!(
        config.collections(),
        CollectionsSettings {
            initial_capacity: Some(256),
            max_load_factor: Some(0.6),
        }
    );
    assert_eq!(config.log_level(), "error");
}

#[test]
#[serial]
fn test_env_overrides_project() {
    let temp_dir = TempDir::new().unwrap();
    let project_dir = temp_dir.path().join("work");
    write_file(
        &project_dir.join("ark.toml"),
        r#"
[collections]
initial_capacity = 256
"#,
    );

    env::set_var("ARK_INITIAL_CAPACITY", "4");
    env::set_var("ARK_LOG", "TRACE");
    let mut loader = loader_with_global(&temp_dir, None);
    let result = loader.load_from_directory(&project_dir);
    env::remove_var("ARK_INITIAL_CAPACITY");
    env::remove_var("ARK_LOG");

    let config = result.unwrap();
    assert_eq!(config.collections().initial_capacity, Some(4));
    assert_eq!(config.log_level(), "trace");
}

#[test]
#[serial]
fn test_load_from_specific_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        &temp_dir.path().join("custom").join("tuning.toml"),
        r#"
[collections]
max_load_factor = 0.9
"#,
    );

    let mut loader = loader_with_global(&temp_dir, None);
    let config = loader.load_from_file(&path).unwrap();

    assert_eq!(config.collections().max_load_factor, Some(0.9));
    assert_eq!(
        config.project_root(),
        Some(temp_dir.path().join("custom").as_path())
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
#[serial]
fn test_missing_specific_file_reports_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let mut loader = loader_with_global(&temp_dir, None);
    let result = loader.load_from_file(&temp_dir.path().join("nope.toml"));
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[test]
#[serial]
fn test_malformed_toml_reports_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    write_file(&temp_dir.path().join("ark.toml"), "[collections\n");

    let mut loader = loader_with_global(&temp_dir, None);
    let result = loader.load_from_directory(temp_dir.path());
    assert!(matches!(result, Err(ConfigError::TomlParseError { .. })));
}

#[rstest]
#[case("[collections]\ninitial_capacity = 0\n", "collections.initial_capacity")]
#[case("[collections]\nmax_load_factor = 0.0\n", "collections.max_load_factor")]
#[case("[collections]\nmax_load_factor = 1e-300\n", "collections.max_load_factor")]
#[case("[collections]\nmax_load_factor = 1.0\n", "collections.max_load_factor")]
#[case("[logging]\nlevel = \"verbose\"\n", "logging.level")]
fn test_invalid_values_rejected(#[case] content: &str, #[case] field: &str) {
    let config = ProjectConfig::parse(content).unwrap();
    match config.validate() {
        Err(ConfigError::InvalidValue { field: actual, .. }) => assert_eq!(actual, field),
        other => panic!("expected InvalidValue for {}, got {:?}", field, other),
    }
}

#[test]
#[serial]
fn test_invalid_env_rejected() {
    let cases = [
        ("ARK_MAX_LOAD_FACTOR", "1.5"),
        ("ARK_MAX_LOAD_FACTOR", "half"),
        ("ARK_INITIAL_CAPACITY", "0"),
        ("ARK_LOG", "noisy"),
    ];

    for (var, value) in cases {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(var, value);
        let mut loader = loader_with_global(&temp_dir, None);
        let result = loader.load_from_directory(temp_dir.path());
        env::remove_var(var);

        match result {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, var),
            other => panic!("expected InvalidValue for {}={}, got {:?}", var, value, other),
        }
    }
}

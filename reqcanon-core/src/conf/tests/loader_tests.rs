use crate::conf::{ConfigError, NormalizerConfig, load_config_with_env};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn no_env() -> Option<HashMap<String, String>> {
    Some(HashMap::new())
}

#[test]
fn defaults_load_without_file() {
    // Act
    let cfg = load_config_with_env(None, no_env()).unwrap();

    // Assert
    assert_eq!(cfg, NormalizerConfig::default());
    assert_eq!(cfg.max_http_body_size, 131072);
    assert_eq!(cfg.max_query_string_size, 4096);
    assert_eq!(cfg.max_fragment_size, 1024);
}

#[test]
fn file_overrides_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("reqcanon.toml");
    fs::write(&path, "max_variable_size = 256\nmax_dictionary_items = 10\n").unwrap();

    // Act
    let cfg = load_config_with_env(Some(path.as_path()), no_env()).unwrap();

    // Assert
    assert_eq!(cfg.max_variable_size, 256);
    assert_eq!(cfg.max_dictionary_items, 10);
    assert_eq!(cfg.max_http_body_size, 131072);
}

#[test]
fn env_overrides_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("reqcanon.toml");
    fs::write(&path, "max_fragment_size = 2048\n").unwrap();
    let env = HashMap::from([(
        "REQCANON_MAX_FRAGMENT_SIZE".to_string(),
        "512".to_string(),
    )]);

    // Act
    let cfg = load_config_with_env(Some(path.as_path()), Some(env)).unwrap();

    // Assert
    assert_eq!(cfg.max_fragment_size, 512);
}

#[test]
fn missing_file_is_a_load_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    // Act
    let err = load_config_with_env(Some(path.as_path()), no_env()).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Load { .. }), "got {err:?}");
}

#[test]
fn unknown_key_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("reqcanon.toml");
    fs::write(&path, "max_cookie_jar = 3\n").unwrap();

    // Act
    let err = load_config_with_env(Some(path.as_path()), no_env()).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Load { .. }), "got {err:?}");
}

#[test]
fn out_of_range_limits_are_all_reported() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("reqcanon.toml");
    fs::write(&path, "max_dictionary_items = 0\nmax_trim_depth = 1000\n").unwrap();

    // Act
    let err = load_config_with_env(Some(path.as_path()), no_env()).unwrap_err();

    // Assert
    match err {
        ConfigError::Validation { errors } => {
            assert_eq!(errors.len(), 2);
            assert!(errors[0].contains("max_dictionary_items"));
            assert!(errors[1].contains("max_trim_depth"));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

use reqcanon_core::conf::load_config_with_env;
use reqcanon_core::request::HttpNormalizer;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Loads a JSON fixture by file name.
pub fn fixture(file: &str) -> Value {
    let path = fixture_path(file);
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("invalid fixture {file}: {e}"))
}

/// Builds a normalizer from a TOML fixture, ignoring the process environment.
pub fn normalizer_from_fixture(file: &str) -> HttpNormalizer {
    let cfg = load_config_with_env(Some(fixture_path(file).as_path()), Some(HashMap::new()))
        .unwrap_or_else(|e| panic!("failed to load {file}: {e}"));
    HttpNormalizer::new(cfg)
}

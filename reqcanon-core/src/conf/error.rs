use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration from {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    #[error("failed to load built-in configuration: {source}")]
    Defaults {
        #[source]
        source: config::ConfigError,
    },

    #[error("config validation failed: {}", errors.join("; "))]
    Validation { errors: Vec<String> },
}

impl ConfigError {
    pub fn load(path: impl Into<PathBuf>, source: config::ConfigError) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }
}

use crate::conf::constraints::validate_limits;
use crate::conf::{ConfigError, NormalizerConfig};
use std::collections::HashMap;
use std::path::Path;

pub const ENV_PREFIX: &str = "REQCANON";

const DEFAULT_CONFIG: &str = r#"
max_http_body_size    = 131072
max_variable_size     = 512
max_dictionary_items  = 50
max_query_string_size = 4096
max_fragment_size     = 1024
max_trim_depth        = 6
"#;

/// Loads limits from built-in defaults, an optional TOML file and
/// `REQCANON_*` environment variables, in that order of precedence.
pub fn load_config(path: Option<&Path>) -> Result<NormalizerConfig, ConfigError> {
    load_config_with_env(path, None)
}

/// Same as [`load_config`], reading overrides from `env` instead of the
/// process environment when given.
pub fn load_config_with_env(
    path: Option<&Path>,
    env: Option<HashMap<String, String>>,
) -> Result<NormalizerConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Layer sources (hard fail on IO / parse)
    //--------------------------------------------------------------------------
    let mut builder = config::Config::builder().add_source(config::File::from_str(
        DEFAULT_CONFIG,
        config::FileFormat::Toml,
    ));

    if let Some(path) = path {
        builder = builder.add_source(
            config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(true),
        );
    }

    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(env),
    );

    let cfg: NormalizerConfig = builder
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| match path {
            Some(path) => ConfigError::load(path, e),
            None => ConfigError::Defaults { source: e },
        })?;

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all range errors)
    //--------------------------------------------------------------------------
    validate_limits(&cfg).map_err(|errors| ConfigError::Validation { errors })?;

    tracing::debug!(
        max_http_body_size = cfg.max_http_body_size,
        max_query_string_size = cfg.max_query_string_size,
        "normalizer config loaded"
    );

    Ok(cfg)
}

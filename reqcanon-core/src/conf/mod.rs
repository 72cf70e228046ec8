mod constraints;
mod error;
mod limits;
mod loader;
#[cfg(test)]
mod tests;

pub use constraints::{RangeConstraint, validate_limits};
pub use error::ConfigError;
pub use limits::NormalizerConfig;
pub use loader::{ENV_PREFIX, load_config, load_config_with_env};

use crate::request::normalization::trim::TrimOptions;
use serde::{Deserialize, Serialize};

/// Size limits applied by the normalization pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Largest request body kept, in characters of serialized content.
    #[serde(default = "default_max_http_body_size")]
    pub max_http_body_size: usize,

    /// Largest single header, cookie or env value.
    #[serde(default = "default_max_variable_size")]
    pub max_variable_size: usize,

    /// Most headers, cookies or env entries kept.
    #[serde(default = "default_max_dictionary_items")]
    pub max_dictionary_items: usize,

    /// Budget for all query pairs together.
    #[serde(default = "default_max_query_string_size")]
    pub max_query_string_size: usize,

    #[serde(default = "default_max_fragment_size")]
    pub max_fragment_size: usize,

    /// Nesting depth past which structured values are flattened to text.
    #[serde(default = "default_max_trim_depth")]
    pub max_trim_depth: usize,
}

fn default_max_http_body_size() -> usize {
    1 << 17
}
fn default_max_variable_size() -> usize {
    512
}
fn default_max_dictionary_items() -> usize {
    50
}
fn default_max_query_string_size() -> usize {
    4096
}
fn default_max_fragment_size() -> usize {
    1024
}
fn default_max_trim_depth() -> usize {
    6
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            max_http_body_size: default_max_http_body_size(),
            max_variable_size: default_max_variable_size(),
            max_dictionary_items: default_max_dictionary_items(),
            max_query_string_size: default_max_query_string_size(),
            max_fragment_size: default_max_fragment_size(),
            max_trim_depth: default_max_trim_depth(),
        }
    }
}

impl NormalizerConfig {
    pub fn body_trim(&self) -> TrimOptions {
        TrimOptions::new(self.max_http_body_size, self.max_trim_depth)
    }

    pub fn variable_trim(&self) -> TrimOptions {
        TrimOptions::new(self.max_variable_size, self.max_trim_depth)
    }

    pub fn query_trim(&self) -> TrimOptions {
        TrimOptions::new(self.max_query_string_size, self.max_trim_depth)
    }
}

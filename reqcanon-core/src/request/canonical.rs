use crate::request::error::ValidationError;
use crate::request::normalization::{Body, as_pair};
use serde::Serialize;
use serde_json::{Map, Value};

/// Header or cookie storage.
///
/// Records produced by the pipeline always hold `Pairs`. Older stored records
/// may carry a JSON mapping instead, which is kept as-is when read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PairStore {
    Pairs(Vec<(String, String)>),
    Mapping(Map<String, Value>),
}

impl Default for PairStore {
    fn default() -> Self {
        PairStore::Pairs(Vec::new())
    }
}

impl PairStore {
    pub fn is_empty(&self) -> bool {
        match self {
            PairStore::Pairs(pairs) => pairs.is_empty(),
            PairStore::Mapping(map) => map.is_empty(),
        }
    }

    /// Pairs in stored order; a mapping is sorted by key.
    pub fn to_pair_values(&self) -> Vec<(String, Value)> {
        match self {
            PairStore::Pairs(pairs) => pairs
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
            PairStore::Mapping(map) => {
                let mut pairs: Vec<(String, Value)> =
                    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                pairs.sort_by(|a, b| a.0.cmp(&b.0));
                pairs
            }
        }
    }

    fn from_stored(value: Option<&Value>) -> PairStore {
        match value {
            Some(Value::Array(items)) => PairStore::Pairs(items.iter().filter_map(as_pair).collect()),
            Some(Value::Object(map)) => PairStore::Mapping(map.clone()),
            _ => PairStore::default(),
        }
    }
}

/// One fully normalized, bounded HTTP request.
///
/// Built by [`HttpNormalizer::assemble`](crate::request::HttpNormalizer::assemble)
/// or read back with [`CanonicalRequest::from_stored`]; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanonicalRequest {
    pub(crate) method: Option<String>,
    pub(crate) url: String,
    pub(crate) query_pairs: Vec<(String, String)>,
    pub(crate) fragment: Option<String>,
    pub(crate) cookies: PairStore,
    pub(crate) headers: PairStore,
    pub(crate) body: Option<Body>,
    pub(crate) inferred_content_type: Option<String>,
    pub(crate) env: Map<String, Value>,
}

impl CanonicalRequest {
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Scheme, host and path only.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query_pairs
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn cookies(&self) -> &PairStore {
        &self.cookies
    }

    pub fn headers(&self) -> &PairStore {
        &self.headers
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    pub fn inferred_content_type(&self) -> Option<&str> {
        self.inferred_content_type.as_deref()
    }

    pub fn env(&self) -> &Map<String, Value> {
        &self.env
    }

    /// Reads back a record previously written with `to_json`, without
    /// running the normalization pipeline again.
    pub fn from_stored(stored: &Value) -> Result<CanonicalRequest, ValidationError> {
        let Some(obj) = stored.as_object() else {
            return Err(ValidationError::InvalidInterface {
                errors: vec!["stored request must be an object".to_string()],
            });
        };

        let text = |key: &str| {
            obj.get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Ok(CanonicalRequest {
            method: text("method"),
            url: text("url").unwrap_or_default(),
            query_pairs: obj
                .get("query_string")
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(as_pair).collect())
                .unwrap_or_default(),
            fragment: text("fragment"),
            cookies: PairStore::from_stored(obj.get("cookies")),
            headers: PairStore::from_stored(obj.get("headers")),
            body: obj.get("data").and_then(Body::from_value),
            inferred_content_type: text("inferred_content_type"),
            env: obj
                .get("env")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
        })
    }
}

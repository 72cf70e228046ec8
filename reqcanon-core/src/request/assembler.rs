use crate::collab::{
    HTTP_INTERFACE_SCHEMA, HeuristicBodyDecoder, HttpInterfaceSchema, IpValidator,
    SchemaValidator, SniffingBodyDecoder, StdIpValidator,
};
use crate::conf::NormalizerConfig;
use crate::request::canonical::{CanonicalRequest, PairStore};
use crate::request::error::ValidationError;
use crate::request::normalization::encoding::{non_empty, scalar_to_json};
use crate::request::normalization::trim::{trim_dict, trim_pair_list, trim_pairs, truncate_chars};
use crate::request::normalization::{
    Body, CookieInput, FormattedHeaders, NormalizationOutcome, QueryInput, RejectReason,
    decompose_url, format_cookies, format_headers, normalize_method, normalize_query,
    resolve_body, scrub_remote_addr,
};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns raw, untrusted request data into a [`CanonicalRequest`].
///
/// Holds the size limits and the collaborators; keeps no per-request state,
/// so one normalizer can serve any number of threads.
#[derive(Clone)]
pub struct HttpNormalizer {
    config: NormalizerConfig,
    schema: Arc<dyn SchemaValidator>,
    decoder: Arc<dyn HeuristicBodyDecoder>,
    ip_validator: Arc<dyn IpValidator>,
}

impl fmt::Debug for HttpNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpNormalizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for HttpNormalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

/// Builder API
impl HttpNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            config,
            schema: Arc::new(HttpInterfaceSchema),
            decoder: Arc::new(SniffingBodyDecoder),
            ip_validator: Arc::new(StdIpValidator),
        }
    }

    pub fn with_schema_validator(mut self, schema: Arc<dyn SchemaValidator>) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_body_decoder(mut self, decoder: Arc<dyn HeuristicBodyDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn with_ip_validator(mut self, ip_validator: Arc<dyn IpValidator>) -> Self {
        self.ip_validator = ip_validator;
        self
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }
}

/// Assembly
impl HttpNormalizer {
    /// Normalizes one raw request payload.
    ///
    /// Fails only when the schema check fails or `method` is not an
    /// acceptable token. Everything else is repaired, dropped or truncated.
    pub fn assemble(&self, data: &Value) -> Result<CanonicalRequest, ValidationError> {
        let cfg = &self.config;

        // Structural check first; nothing below runs on rejected input.
        self.schema
            .validate(data, HTTP_INTERFACE_SCHEMA)
            .map_err(|errors| {
                warn!(errors = errors.len(), "request rejected by schema");
                ValidationError::InvalidInterface { errors }
            })?;

        let method = match non_empty(data, "method") {
            Some(Value::String(raw)) => Some(settle("method", normalize_method(raw)).map_err(
                |_| {
                    warn!(
                        method_len = raw.chars().count(),
                        "request rejected: invalid method"
                    );
                    ValidationError::InvalidMethod {
                        method: raw.clone(),
                    }
                },
            )?),
            Some(other) => {
                return Err(ValidationError::InvalidMethod {
                    method: other.to_string(),
                });
            }
            None => None,
        };

        // The URL supplies fallbacks for the query string and fragment.
        let raw_url = non_empty(data, "url").map(scalar_to_json);
        let split = settle_lossy("url", decompose_url(raw_url.as_deref()));

        let query_input = match non_empty(data, "query_string") {
            Some(explicit) => Some(QueryInput::from(explicit)),
            None if !split.query.is_empty() => Some(QueryInput::Text(&split.query)),
            None => None,
        };
        let query_pairs = query_input
            .map(|input| settle_lossy("query_string", normalize_query(input)))
            .unwrap_or_default();

        let fragment = non_empty(data, "fragment")
            .map(scalar_to_json)
            .or_else(|| (!split.fragment.is_empty()).then(|| split.fragment.clone()));

        // Header formatting may pull a Cookie header out of the list.
        let formatted = non_empty(data, "headers")
            .map(|headers| format_headers(headers.into()))
            .unwrap_or_default();

        let cookies = match non_empty(data, "cookies") {
            Some(explicit) => format_cookies(explicit.into()),
            None => match formatted.cookie.as_deref() {
                Some(header) if !header.is_empty() => format_cookies(CookieInput::Text(header)),
                _ => Vec::new(),
            },
        };

        let resolved = resolve_body(
            data.get("data").and_then(Body::from_value),
            formatted.content_type(),
            // Key presence matters: stored data carries the type even when null.
            data.get("inferred_content_type")
                .map(|v| v.as_str().map(str::to_string)),
            self.decoder.as_ref(),
            cfg.body_trim(),
        );

        let env = match data.get("env") {
            Some(Value::Object(env)) => env.clone(),
            _ => Map::new(),
        };
        let env = settle_lossy("env", scrub_remote_addr(env, self.ip_validator.as_ref()));

        let FormattedHeaders { headers, .. } = formatted;
        let request = CanonicalRequest {
            method,
            url: split.base_url(),
            query_pairs: trim_pair_list(query_pairs, cfg.query_trim()),
            fragment: fragment.map(|f| truncate_chars(&f, cfg.max_fragment_size as isize)),
            cookies: PairStore::Pairs(trim_pairs(
                cookies,
                cfg.max_dictionary_items,
                cfg.max_variable_size,
            )),
            headers: PairStore::Pairs(trim_pairs(
                headers,
                cfg.max_dictionary_items,
                cfg.max_variable_size,
            )),
            body: resolved.body,
            inferred_content_type: resolved.inferred_content_type,
            env: trim_dict(env, cfg.max_dictionary_items, cfg.variable_trim()),
        };

        debug!(
            has_method = request.method().is_some(),
            query_pairs = request.query_pairs().len(),
            has_body = request.body().is_some(),
            has_inferred_content_type = request.inferred_content_type().is_some(),
            "request assembled"
        );

        Ok(request)
    }
}

/// Unwraps an outcome, logging rewrites against `field`.
fn settle<T>(field: &'static str, outcome: NormalizationOutcome<T>) -> Result<T, RejectReason> {
    if let Some(reason) = outcome.rewrite_reason() {
        debug!(field, reason = reason.as_str(), "request field rewritten");
    }
    outcome.into_result()
}

/// For normalizers that only ever correct: a reject degrades to the default.
fn settle_lossy<T: Default>(field: &'static str, outcome: NormalizationOutcome<T>) -> T {
    settle(field, outcome).unwrap_or_else(|reason| {
        debug!(field, ?reason, "request field dropped");
        T::default()
    })
}

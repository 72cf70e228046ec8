use crate::collab::HeuristicBodyDecoder;
use crate::request::normalization::encoding::{is_empty_value, scalar_to_json};
use crate::request::normalization::trim::{TrimOptions, trim, truncate_chars};
use serde::Serialize;
use serde_json::Value;

/// Request body: raw text, or a structure the client (or the decoder) produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    Text(String),
    Structured(Value),
}

impl Body {
    /// Reads a body from client input. Empty values mean no body; scalars
    /// other than strings are kept as their JSON text.
    pub fn from_value(value: &Value) -> Option<Body> {
        if is_empty_value(value) {
            return None;
        }

        Some(match value {
            Value::String(s) => Body::Text(s.clone()),
            Value::Object(_) | Value::Array(_) => Body::Structured(value.clone()),
            other => Body::Text(scalar_to_json(other)),
        })
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Body::Structured(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Text(s) => Some(s),
            Body::Structured(_) => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Body::Text(s) => Value::String(s.clone()),
            Body::Structured(v) => v.clone(),
        }
    }

    /// Bounds the body to `options.max_size` characters of serialized content.
    pub fn trimmed(self, options: TrimOptions) -> Body {
        match self {
            Body::Text(s) => Body::Text(truncate_chars(&s, options.max_size as isize)),
            Body::Structured(v) => Body::Structured(trim(&v, options)),
        }
    }
}

/// Body and content type after resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBody {
    pub body: Option<Body>,
    pub inferred_content_type: Option<String>,
}

/// Works out the body representation and its inferred content type.
///
/// `supplied` is the caller's precomputed inferred type, present when the
/// request was normalized before (stored data read back). In that case, or
/// when the body is already structured, the decoder is not consulted again.
/// The result is trimmed to `options`.
pub fn resolve_body(
    body: Option<Body>,
    content_type: Option<String>,
    supplied: Option<Option<String>>,
    decoder: &dyn HeuristicBodyDecoder,
    options: TrimOptions,
) -> ResolvedBody {
    let already_decoded = supplied.is_some();
    let mut inferred_content_type = supplied.unwrap_or_else(|| content_type.clone());
    let mut body = body;

    if !already_decoded && !body.as_ref().is_some_and(Body::is_structured) {
        let (decoded, inferred) = decoder.decode(body, content_type.as_deref());
        body = decoded;
        inferred_content_type = inferred;
    }

    ResolvedBody {
        body: body.map(|b| b.trimmed(options)),
        inferred_content_type,
    }
}

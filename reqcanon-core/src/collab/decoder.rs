use crate::request::normalization::{Body, parse_qsl_strict};
use serde_json::{Map, Value};

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Best-effort body sniffing.
///
/// Given a body and the declared content type, returns the decoded body and
/// the content type it was decoded as. Must never fail: anything it cannot
/// make sense of is returned as it came in.
pub trait HeuristicBodyDecoder: Send + Sync {
    fn decode(&self, body: Option<Body>, content_type: Option<&str>) -> (Option<Body>, Option<String>);
}

/// Tries JSON, then strict form-urlencoded, on text bodies.
///
/// The decoder matching the declared content type goes first. Only JSON
/// objects and arrays count as a successful JSON decode.
#[derive(Debug, Default, Clone, Copy)]
pub struct SniffingBodyDecoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Form,
}

impl Format {
    fn content_type(&self) -> &'static str {
        match self {
            Format::Json => JSON_CONTENT_TYPE,
            Format::Form => FORM_CONTENT_TYPE,
        }
    }

    fn decode(&self, text: &str) -> Option<Value> {
        match self {
            // Bare scalars such as `123` are left as text.
            Format::Json => match serde_json::from_str::<Value>(text) {
                Ok(v @ (Value::Object(_) | Value::Array(_))) => Some(v),
                _ => None,
            },
            Format::Form => {
                let mut map = Map::new();
                for (k, v) in parse_qsl_strict(text)? {
                    map.insert(k, Value::String(v));
                }
                Some(Value::Object(map))
            }
        }
    }
}

impl HeuristicBodyDecoder for SniffingBodyDecoder {
    fn decode(&self, body: Option<Body>, content_type: Option<&str>) -> (Option<Body>, Option<String>) {
        let declared = content_type.map(str::to_string);

        let Some(Body::Text(text)) = &body else {
            return (body, declared);
        };

        let mut formats = [Format::Json, Format::Form];
        formats.sort_by_key(|f| Some(f.content_type()) != content_type);

        for format in formats {
            if let Some(decoded) = format.decode(text) {
                tracing::debug!(
                    decoded_as = format.content_type(),
                    as_declared = Some(format.content_type()) == content_type,
                    "decoded request body"
                );
                return (
                    Some(Body::Structured(decoded)),
                    Some(format.content_type().to_string()),
                );
            }
        }

        (body, declared)
    }
}

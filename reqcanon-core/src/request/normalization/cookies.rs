use crate::request::normalization::encoding::{repair_encoding, scalar_to_json};
use crate::request::normalization::query::{as_pair, parse_qsl};
use serde_json::{Map, Value};

/// Accepted shapes of client-submitted cookies.
#[derive(Debug, Clone, Copy)]
pub enum CookieInput<'a> {
    Text(&'a str),
    Mapping(&'a Map<String, Value>),
    Pairs(&'a [Value]),
    Unsupported,
}

impl<'a> From<&'a Value> for CookieInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(s) => CookieInput::Text(s),
            Value::Object(map) => CookieInput::Mapping(map),
            Value::Array(items) => CookieInput::Pairs(items),
            _ => CookieInput::Unsupported,
        }
    }
}

/// Normalizes cookies into `(name, value)` pairs.
///
/// Text is parsed like a query string (`&` and `;` both separate cookies),
/// so a raw `Cookie` header works too. Names are whitespace-trimmed and every
/// name and value is passed through [`repair_encoding`].
pub fn format_cookies(input: CookieInput<'_>) -> Vec<(String, String)> {
    let pairs: Vec<(String, String)> = match input {
        CookieInput::Text(raw) => parse_qsl(raw),
        CookieInput::Mapping(map) => map
            .iter()
            .map(|(k, v)| (k.clone(), scalar_to_json(v)))
            .collect(),
        CookieInput::Pairs(items) => items.iter().filter_map(as_pair).collect(),
        CookieInput::Unsupported => Vec::new(),
    };

    pairs
        .into_iter()
        .map(|(k, v)| {
            (
                repair_encoding(k.trim().as_bytes()),
                repair_encoding(v.as_bytes()),
            )
        })
        .collect()
}

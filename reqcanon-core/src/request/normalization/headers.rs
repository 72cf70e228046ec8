use crate::request::normalization::encoding::{scalar_to_json, title_case};
use serde_json::{Map, Value};

/// Accepted shapes of client-submitted headers.
#[derive(Debug, Clone, Copy)]
pub enum HeaderInput<'a> {
    Mapping(&'a Map<String, Value>),
    Pairs(&'a [Value]),
    Unsupported,
}

impl<'a> From<&'a Value> for HeaderInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => HeaderInput::Mapping(map),
            Value::Array(items) => HeaderInput::Pairs(items),
            _ => HeaderInput::Unsupported,
        }
    }
}

/// Headers reshaped into ordered pairs, with the `Cookie` header split off.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormattedHeaders {
    pub headers: Vec<(String, String)>,
    pub cookie: Option<String>,
}

impl FormattedHeaders {
    /// Value of the first `Content-Type` header with parameters removed.
    pub fn content_type(&self) -> Option<String> {
        self.headers
            .iter()
            .find(|(k, _)| k == "Content-Type")
            .map(|(_, v)| {
                let essence = v.split_once(';').map_or(v.as_str(), |(head, _)| head);
                essence.trim_end().to_string()
            })
    }
}

/// Normalizes headers into title-cased `(name, value)` pairs.
///
/// Array values are folded into one `", "`-separated value. A header named
/// `cookie` (any case) is not kept in the list; the last one seen becomes
/// [`FormattedHeaders::cookie`]. `null` entries, `null` values and list
/// elements that are not pairs are dropped.
pub fn format_headers(input: HeaderInput<'_>) -> FormattedHeaders {
    let entries: Vec<(String, &Value)> = match input {
        HeaderInput::Mapping(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        HeaderInput::Pairs(items) => items
            .iter()
            .filter_map(|item| match item.as_array()?.as_slice() {
                [k, v] => Some((scalar_to_json(k), v)),
                _ => None,
            })
            .collect(),
        HeaderInput::Unsupported => Vec::new(),
    };

    let mut out = FormattedHeaders::default();

    for (name, value) in entries {
        // Multi-valued headers collapse the way most HTTP libraries merge them.
        let value = match value {
            Value::Null => continue,
            Value::Array(parts) => parts
                .iter()
                .map(scalar_to_json)
                .collect::<Vec<_>>()
                .join(", "),
            other => scalar_to_json(other),
        };

        if name.eq_ignore_ascii_case("cookie") {
            out.cookie = Some(value);
        } else {
            out.headers.push((title_case(&name), value));
        }
    }

    out
}

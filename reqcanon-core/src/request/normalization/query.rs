use crate::request::normalization::encoding::{repair_ellipsis, repair_encoding, scalar_to_json};
use crate::request::normalization::{NormalizationOutcome, RewriteReason};
use percent_encoding::percent_decode_str;
use serde_json::{Map, Value};

/// Accepted shapes of a client-submitted query string.
#[derive(Debug, Clone, Copy)]
pub enum QueryInput<'a> {
    Text(&'a str),
    Mapping(&'a Map<String, Value>),
    Pairs(&'a [Value]),
    Unsupported,
}

impl<'a> From<&'a Value> for QueryInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(s) => QueryInput::Text(s),
            Value::Object(map) => QueryInput::Mapping(map),
            Value::Array(items) => QueryInput::Pairs(items),
            _ => QueryInput::Unsupported,
        }
    }
}

/// Coerces any accepted query-string shape into ordered text pairs.
///
/// - text: one leading `?` is dropped, a trailing ellipsis is repaired and
///   the rest is parsed as `k=v` fields with blank values kept.
/// - mapping: one pair per entry, in insertion order.
/// - pairs: only two-element arrays survive; everything else is dropped.
/// - anything else: empty.
///
/// Values that are not strings are rendered as JSON. Nothing here fails;
/// lossy coercions are reported as rewrites.
pub fn normalize_query(input: QueryInput<'_>) -> NormalizationOutcome<Vec<(String, String)>> {
    match input {
        QueryInput::Text(raw) => {
            let raw = raw.strip_prefix('?').unwrap_or(raw);
            match repair_ellipsis(raw) {
                Some(repaired) => NormalizationOutcome::Rewrite {
                    value: parse_qsl(&repaired),
                    reason: RewriteReason::EllipsisRepair,
                },
                None => NormalizationOutcome::Accept(parse_qsl(raw)),
            }
        }
        QueryInput::Mapping(map) => NormalizationOutcome::Accept(
            map.iter()
                .map(|(k, v)| (k.clone(), scalar_to_json(v)))
                .collect(),
        ),
        QueryInput::Pairs(items) => {
            let pairs: Vec<(String, String)> = items.iter().filter_map(as_pair).collect();

            if pairs.len() == items.len() {
                NormalizationOutcome::Accept(pairs)
            } else {
                NormalizationOutcome::Rewrite {
                    value: pairs,
                    reason: RewriteReason::QueryPairsDropped,
                }
            }
        }
        QueryInput::Unsupported => NormalizationOutcome::Rewrite {
            value: Vec::new(),
            reason: RewriteReason::QueryShapeUnsupported,
        },
    }
}

/// Reads a two-element JSON array as a text pair.
pub fn as_pair(value: &Value) -> Option<(String, String)> {
    match value.as_array()?.as_slice() {
        [k, v] => Some((scalar_to_json(k), scalar_to_json(v))),
        _ => None,
    }
}

/// Parses `k=v` fields separated by `&` or `;`, keeping blank values.
///
/// `+` decodes to a space and percent escapes are decoded; bytes that do not
/// form valid UTF-8 are replaced. A field without `=` becomes a key with an
/// empty value.
pub fn parse_qsl(input: &str) -> Vec<(String, String)> {
    fields(input)
        .map(|field| match field.split_once('=') {
            Some((k, v)) => (unquote_plus(k), unquote_plus(v)),
            None => (unquote_plus(field), String::new()),
        })
        .collect()
}

/// Like [`parse_qsl`] but every field must contain `=`.
///
/// Returns `None` for the first field that does not, or when there are no
/// fields at all.
pub fn parse_qsl_strict(input: &str) -> Option<Vec<(String, String)>> {
    let pairs = fields(input)
        .map(|field| {
            field
                .split_once('=')
                .map(|(k, v)| (unquote_plus(k), unquote_plus(v)))
        })
        .collect::<Option<Vec<_>>>()?;

    (!pairs.is_empty()).then_some(pairs)
}

fn fields(input: &str) -> impl Iterator<Item = &str> {
    input.split(['&', ';']).filter(|f| !f.is_empty())
}

fn unquote_plus(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes: Vec<u8> = percent_decode_str(&spaced).collect();
    repair_encoding(&bytes)
}

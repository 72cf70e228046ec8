use serde_json::{Map, Value};
use std::collections::HashMap;

const TRUNCATION_SUFFIX: &str = "...";

/// Budget for a single [`trim`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimOptions {
    /// Maximum serialized size, counted in characters.
    pub max_size: usize,
    /// Containers nested deeper than this are flattened into JSON text.
    pub max_depth: usize,
}

impl TrimOptions {
    pub fn new(max_size: usize, max_depth: usize) -> Self {
        Self {
            max_size,
            max_depth,
        }
    }
}

/// Shortens `value` to at most `length` characters, ending in `...` when cut.
///
/// Budgets too small for the suffix keep a bare prefix, so the result never
/// exceeds `length`; a non-positive budget yields an empty string.
pub fn truncate_chars(value: &str, length: isize) -> String {
    let length = length.max(0) as usize;
    if value.chars().count() <= length {
        return value.to_string();
    }

    if length < TRUNCATION_SUFFIX.len() {
        return value.chars().take(length).collect();
    }

    let mut out: String = value
        .chars()
        .take(length - TRUNCATION_SUFFIX.len())
        .collect();
    out.push_str(TRUNCATION_SUFFIX);
    out
}

/// Bounds an arbitrary JSON value to an approximate serialized size.
///
/// Strings keep their prefix. Arrays and objects are walked with a running
/// budget and stop accepting children once it is spent; object entries are
/// visited smallest-first so short values survive, but the result keeps the
/// input key order. Never fails.
pub fn trim(value: &Value, options: TrimOptions) -> Value {
    trim_at(value, options, 0, 0)
}

fn trim_at(value: &Value, options: TrimOptions, depth: usize, mut size: usize) -> Value {
    if depth > options.max_depth {
        let flattened = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Value::String(truncate_chars(
            &flattened,
            options.max_size as isize - size as isize,
        ));
    }

    match value {
        Value::Object(map) => {
            size += 2;

            let mut visit: Vec<(&String, &Value)> = map.iter().collect();
            visit.sort_by(|(ka, va), (kb, vb)| {
                text_len(va).cmp(&text_len(vb)).then_with(|| ka.cmp(kb))
            });

            let mut kept: HashMap<&String, Value> = HashMap::with_capacity(visit.len());
            for (key, child) in visit {
                let trimmed = trim_at(child, options, depth + 1, size);
                size += text_len(&trimmed) + 1;
                kept.insert(key, trimmed);
                if size >= options.max_size {
                    break;
                }
            }

            let mut out = Map::with_capacity(kept.len());
            for key in map.keys() {
                if let Some(v) = kept.remove(key) {
                    out.insert(key.clone(), v);
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => {
            size += 2;

            let mut out = Vec::with_capacity(items.len());
            for child in items {
                let trimmed = trim_at(child, options, depth + 1, size);
                size += text_len(&trimmed);
                out.push(trimmed);
                if size >= options.max_size {
                    break;
                }
            }
            Value::Array(out)
        }
        Value::String(s) => Value::String(truncate_chars(
            s,
            options.max_size as isize - size as isize,
        )),
        other => other.clone(),
    }
}

fn text_len(value: &Value) -> usize {
    match value {
        Value::String(s) => s.chars().count(),
        other => other.to_string().chars().count(),
    }
}

/// Keeps at most `max_items` entries, trimming every value.
pub fn trim_dict(map: Map<String, Value>, max_items: usize, options: TrimOptions) -> Map<String, Value> {
    map.into_iter()
        .take(max_items)
        .map(|(k, v)| {
            let trimmed = trim(&v, options);
            (k, trimmed)
        })
        .collect()
}

/// Keeps at most `max_items` pairs in order, trimming every value.
pub fn trim_pairs(
    pairs: Vec<(String, String)>,
    max_items: usize,
    max_value_size: usize,
) -> Vec<(String, String)> {
    pairs
        .into_iter()
        .take(max_items)
        .map(|(k, v)| {
            let v = truncate_chars(&v, max_value_size as isize);
            (k, v)
        })
        .collect()
}

/// Bounds a list of pairs by total serialized size, as if it were a JSON
/// array of two-element arrays. Pairs cut in half by the budget are dropped.
pub fn trim_pair_list(pairs: Vec<(String, String)>, options: TrimOptions) -> Vec<(String, String)> {
    let as_value = Value::Array(
        pairs
            .into_iter()
            .map(|(k, v)| Value::Array(vec![Value::String(k), Value::String(v)]))
            .collect(),
    );

    let Value::Array(items) = trim(&as_value, options) else {
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Array(mut pair) if pair.len() == 2 => {
                let v = pair.pop()?;
                let k = pair.pop()?;
                match (k, v) {
                    (Value::String(k), Value::String(v)) => Some((k, v)),
                    _ => None,
                }
            }
            _ => None,
        })
        .collect()
}

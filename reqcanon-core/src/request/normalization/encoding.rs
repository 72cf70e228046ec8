use serde_json::Value;

/// Trailing marker some legacy SDKs used for client-side truncation.
pub const HORIZONTAL_ELLIPSIS: char = '\u{2026}';

/// Decodes raw bytes as UTF-8, replacing every undecodable sequence with U+FFFD.
///
/// Idempotent: text that already went through the repair decodes to itself.
pub fn repair_encoding(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

/// Replaces a trailing horizontal ellipsis with three ASCII periods.
///
/// Canonical URLs never carry the glyph, so it is safe to treat it as a
/// truncation marker. The value grows by two characters and is trimmed
/// again further down the pipeline.
pub fn repair_ellipsis(value: &str) -> Option<String> {
    value
        .strip_suffix(HORIZONTAL_ELLIPSIS)
        .map(|head| format!("{head}..."))
}

/// Strings pass through untouched, every other value is rendered as compact JSON.
pub fn scalar_to_json(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Emptiness as understood by lenient clients: `null`, `""`, `0`, `false`,
/// `[]` and `{}` all mean "not supplied".
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Looks up `key` and treats an empty value as missing.
pub fn non_empty<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.get(key).filter(|v| !is_empty_value(v))
}

/// Title-cases a header name: a letter is uppercased when the previous
/// character is not a letter and lowercased otherwise.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_letter = false;

    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

use crate::collab::{FORM_CONTENT_TYPE, Renderer};
use crate::request::canonical::{CanonicalRequest, PairStore};
use crate::request::normalization::Body;
use crate::request::normalization::encoding::is_empty_value;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde_json::{Map, Value, json};

/// Key under which the interface is stored on an event.
pub const INTERFACE_PATH: &str = "request";
pub const SCORE: u32 = 800;
pub const DISPLAY_SCORE: u32 = 1000;
pub const FORM_TYPE: &str = FORM_CONTENT_TYPE;

pub const EMAIL_TEMPLATE: &str = "partial/interfaces/http_email.html";

/// Characters `quote_plus` leaves alone; space is kept here and turned into `+` afterwards.
const QUOTE_PLUS: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b' ');

/// Storage shape. Field names, order and pruning are a compatibility contract.
#[derive(Serialize)]
struct StoredRequest<'a> {
    #[serde(skip_serializing_if = "is_blank")]
    method: Option<&'a str>,
    #[serde(skip_serializing_if = "str::is_empty")]
    url: &'a str,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    query_string: &'a [(String, String)],
    #[serde(skip_serializing_if = "is_blank")]
    fragment: Option<&'a str>,
    #[serde(skip_serializing_if = "PairStore::is_empty")]
    cookies: &'a PairStore,
    #[serde(skip_serializing_if = "PairStore::is_empty")]
    headers: &'a PairStore,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Body>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    env: &'a Map<String, Value>,
    #[serde(skip_serializing_if = "is_blank")]
    inferred_content_type: Option<&'a str>,
}

fn is_blank(value: &Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

impl CanonicalRequest {
    /// Full record as JSON, with absent and empty fields left out.
    pub fn to_json(&self) -> Value {
        let stored = StoredRequest {
            method: self.method(),
            url: self.url(),
            query_string: self.query_pairs(),
            fragment: self.fragment(),
            cookies: self.cookies(),
            headers: self.headers(),
            data: self.body(),
            env: self.env(),
            inferred_content_type: self.inferred_content_type(),
        };

        serde_json::to_value(&stored).unwrap_or_else(|_| Value::Object(Map::new()))
    }

    /// `url` with the encoded query string and the fragment put back.
    pub fn full_url(&self) -> String {
        let mut url = self.url.clone();
        if url.is_empty() {
            return url;
        }

        if !self.query_pairs.is_empty() {
            url.push('?');
            url.push_str(&urlencode(&self.query_pairs));
        }
        if let Some(fragment) = self.fragment().filter(|f| !f.is_empty()) {
            url.push('#');
            url.push_str(fragment);
        }

        url
    }

    pub fn title(&self) -> &'static str {
        "Request"
    }

    /// View for API consumers. Public viewers get an empty object.
    pub fn api_context(&self, is_public: bool) -> Value {
        if is_public {
            return Value::Object(Map::new());
        }

        json!({
            "method": self.method(),
            "url": Some(self.url()).filter(|u| !u.is_empty()),
            "query": self.query_pairs(),
            "fragment": self.fragment(),
            "data": self.body(),
            "headers": self.headers().to_pair_values(),
            "cookies": self.cookies().to_pair_values(),
            "env": Some(self.env()).filter(|e| !e.is_empty()),
            "inferredContentType": self.inferred_content_type(),
        })
    }

    /// Reshapes redaction metadata to match [`api_context`](Self::api_context).
    ///
    /// Returns `None` for public viewers. Positional header and cookie
    /// metadata is renumbered `"0"`, `"1"`, ... in key order; the whole-field
    /// entry under `""` is kept when present.
    pub fn api_meta(&self, meta: &Value, is_public: bool) -> Option<Value> {
        if is_public {
            return None;
        }

        let field = |key: &str| meta.get(key).cloned().unwrap_or(Value::Null);

        Some(json!({
            "": field(""),
            "method": field("method"),
            "url": field("url"),
            "query": field("query_string"),
            "data": field("data"),
            "headers": reindex_pair_meta(meta.get("headers")),
            "cookies": reindex_pair_meta(meta.get("cookies")),
            "env": field("env"),
        }))
    }

    /// Context handed to the email template.
    pub fn email_context(&self) -> Value {
        json!({
            "url": self.full_url(),
            "short_url": self.url(),
            "method": self.method(),
            "query_string": urlencode(self.query_pairs()),
            "fragment": self.fragment(),
        })
    }

    pub fn to_email_html(&self, renderer: &dyn Renderer) -> String {
        renderer.render(EMAIL_TEMPLATE, &self.email_context())
    }
}

fn reindex_pair_meta(meta: Option<&Value>) -> Value {
    let entries = match meta {
        Some(Value::Object(entries)) if !entries.is_empty() => entries,
        other => return other.cloned().unwrap_or(Value::Null),
    };

    let mut entries = entries.clone();
    let whole_field = entries.shift_remove("");

    let mut positional: Vec<(String, Value)> = entries.into_iter().collect();
    positional.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = Map::with_capacity(positional.len() + 1);
    for (i, (_, entry)) in positional.into_iter().enumerate() {
        out.insert(i.to_string(), json!({ "1": entry }));
    }
    if let Some(whole_field) = whole_field.filter(|m| !is_empty_value(m)) {
        out.insert(String::new(), whole_field);
    }

    Value::Object(out)
}

/// `application/x-www-form-urlencoded` serialization of ordered pairs.
pub fn urlencode(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", quote_plus(k), quote_plus(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn quote_plus(value: &str) -> String {
    utf8_percent_encode(value, QUOTE_PLUS)
        .to_string()
        .replace(' ', "+")
}

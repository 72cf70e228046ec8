use crate::request::normalization::{NormalizationOutcome, RejectReason, RewriteReason};
use once_cell::sync::Lazy;
use regex::Regex;

// Loose match instead of a hardcoded method list; WebDAV and custom verbs are fine.
static HTTP_METHOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z\-_]{3,32}$").expect("static method pattern"));

/// Uppercases and validates a request method.
///
/// `GET` and `POST` short-circuit; anything else must match
/// `^[A-Z\-_]{3,32}$` after uppercasing or the whole request is rejected.
pub fn normalize_method(raw: &str) -> NormalizationOutcome<String> {
    let method = raw.to_uppercase();

    if method != "GET" && method != "POST" && !HTTP_METHOD_RE.is_match(&method) {
        return NormalizationOutcome::Reject {
            reason: RejectReason::InvalidMethod,
        };
    }

    if method == raw {
        NormalizationOutcome::Accept(method)
    } else {
        NormalizationOutcome::Rewrite {
            value: method,
            reason: RewriteReason::MethodCase,
        }
    }
}

use crate::request::normalization::encoding::repair_ellipsis;
use crate::request::normalization::{NormalizationOutcome, RewriteReason};

const SCHEME_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+-.";

/// Schemes whose URLs carry a `//netloc` authority when rejoined.
const USES_NETLOC: &[&str] = &[
    "", "ftp", "http", "gopher", "nntp", "telnet", "imap", "wais", "file", "mms", "https",
    "shttp", "snews", "prospero", "rtsp", "rtspu", "rsync", "svn", "svn+ssh", "sftp", "nfs",
    "git", "git+ssh", "ws", "wss",
];

/// The five components of a URL. Missing components are empty strings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SplitUrl {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

impl SplitUrl {
    /// Rejoins scheme, netloc and path only. Query and fragment are tracked
    /// separately and never part of the canonical URL.
    pub fn base_url(&self) -> String {
        unsplit_url(&self.scheme, &self.netloc, &self.path, "", "")
    }
}

/// Decomposes a client-submitted URL.
///
/// A trailing horizontal ellipsis (legacy SDK truncation marker) is replaced by
/// `...` before splitting; that is reported as a rewrite. A missing URL yields
/// empty components.
pub fn decompose_url(raw: Option<&str>) -> NormalizationOutcome<SplitUrl> {
    let Some(raw) = raw else {
        return NormalizationOutcome::Accept(SplitUrl::default());
    };

    match repair_ellipsis(raw) {
        Some(repaired) => NormalizationOutcome::Rewrite {
            value: split_url(&repaired),
            reason: RewriteReason::EllipsisRepair,
        },
        None => NormalizationOutcome::Accept(split_url(raw)),
    }
}

/// Splits `url` into scheme, netloc, path, query and fragment.
pub fn split_url(url: &str) -> SplitUrl {
    let mut scheme = String::new();
    let mut rest = url;

    if let Some(i) = url.find(':')
        && i > 0
    {
        let prefix = &url[..i];
        let tail = &url[i + 1..];
        let valid_scheme = prefix
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && prefix.chars().all(|c| SCHEME_CHARS.contains(c));
        // `host:8080` is a path with a port, not a scheme.
        let looks_like_port = !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit());

        if valid_scheme && (!looks_like_port || prefix.eq_ignore_ascii_case("http")) {
            scheme = prefix.to_ascii_lowercase();
            rest = tail;
        }
    }

    let mut netloc = String::new();
    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        netloc = after[..end].to_string();
        rest = &after[end..];
    }

    let mut fragment = String::new();
    if let Some((head, tail)) = rest.split_once('#') {
        fragment = tail.to_string();
        rest = head;
    }

    let mut query = String::new();
    if let Some((head, tail)) = rest.split_once('?') {
        query = tail.to_string();
        rest = head;
    }

    SplitUrl {
        scheme,
        netloc,
        path: rest.to_string(),
        query,
        fragment,
    }
}

/// Inverse of [`split_url`].
pub fn unsplit_url(scheme: &str, netloc: &str, path: &str, query: &str, fragment: &str) -> String {
    let mut url = path.to_string();

    if !netloc.is_empty()
        || (!scheme.is_empty() && USES_NETLOC.contains(&scheme) && !url.starts_with("//"))
    {
        if !url.is_empty() && !url.starts_with('/') {
            url.insert(0, '/');
        }
        url = format!("//{netloc}{url}");
    }

    if !scheme.is_empty() {
        url = format!("{scheme}:{url}");
    }
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    if !fragment.is_empty() {
        url.push('#');
        url.push_str(fragment);
    }

    url
}

//! Canonical path+query encoding
//!
//! Two variants are produced from the same canonical query:
//!
//! ```text
//! plain:   /images/jets.png?con=10&w=400        (hashed by the signer)
//! escaped: /images/jets.png?con%3D10%26w%3D400  (placed in the final URL)
//! ```
//!
//! The escaped variant is the plain query string percent-encoded a second
//! time, so `=`, `&` and `%` from the first pass are escaped as well.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::Params;

/// RFC 3986 unreserved characters (`A-Z a-z 0-9 - _ . ~`) pass through;
/// every other byte is percent-encoded.
pub const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode everything outside the unreserved set
pub fn escape_unreserved(input: &str) -> String {
    utf8_percent_encode(input, UNRESERVED).to_string()
}

/// Canonical `k1=v1&k2=v2` query string in ascending key order.
///
/// Returns `None` when params are absent or empty.
pub fn query_string(params: Option<&Params>) -> Option<String> {
    let params = params.filter(|p| !p.is_empty())?;

    let pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                escape_unreserved(key),
                escape_unreserved(&value.to_string())
            )
        })
        .collect();

    Some(pairs.join("&"))
}

/// Path plus the singly-encoded query: the string the signature covers
pub fn encode_query(path: &str, params: Option<&Params>) -> String {
    PathQuery::new(path, params).plain
}

/// Path plus the doubly-encoded query: the form that goes into the URL
pub fn encode_query_escaped(path: &str, params: Option<&Params>) -> String {
    PathQuery::new(path, params).escaped
}

/// Both encodings of one path+query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuery {
    pub plain: String,
    pub escaped: String,
    has_query: bool,
}

impl PathQuery {
    pub fn new(path: &str, params: Option<&Params>) -> Self {
        match query_string(params) {
            Some(query) => Self {
                plain: format!("{}?{}", path, query),
                escaped: format!("{}?{}", path, escape_unreserved(&query)),
                has_query: true,
            },
            None => Self {
                plain: path.to_string(),
                escaped: path.to_string(),
                has_query: false,
            },
        }
    }

    /// Whether a query string was built (params present and non-empty)
    pub fn has_query(&self) -> bool {
        self.has_query
    }
}

//! Assertion helpers for tests.

use percent_encoding::percent_decode_str;
use pretty_assertions::assert_eq;

use pixsign::models::Params;

/// Split a signed URL into (everything before the signature, signature)
pub fn split_signature(url: &str) -> (&str, &str) {
    url.rsplit_once("s=")
        .unwrap_or_else(|| panic!("URL has no signature parameter: {}", url))
}

/// Assert the URL ends in a well-formed signature and return it
pub fn assert_signed(url: &str) -> &str {
    let (_, signature) = split_signature(url);
    assert_eq!(
        signature.len(),
        32,
        "Expected 32-character signature in {}",
        url
    );
    assert!(
        signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "Expected lowercase hex signature, got {}",
        signature
    );
    signature
}

/// Decode the escaped query of a signed URL twice and collect its pairs
pub fn decoded_query_pairs(url: &str) -> Vec<(String, String)> {
    let (head, _) = split_signature(url);
    let (_, escaped) = head
        .rsplit_once('?')
        .unwrap_or_else(|| panic!("URL has no query: {}", url));
    let escaped = escaped
        .strip_suffix("%26")
        .unwrap_or_else(|| panic!("Expected escaped ampersand before signature: {}", url));

    let once = percent_decode_str(escaped).decode_utf8().unwrap().to_string();
    once.split('&')
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap();
            (
                percent_decode_str(k).decode_utf8().unwrap().to_string(),
                percent_decode_str(v).decode_utf8().unwrap().to_string(),
            )
        })
        .collect()
}

/// Assert the URL's query round-trips back to the given params
pub fn assert_query_round_trips(url: &str, params: &Params) {
    let expected: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (k.clone(), v.to_string()))
        .collect();
    assert_eq!(decoded_query_pairs(url), expected);
}

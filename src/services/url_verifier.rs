//! Signed URL verification
//!
//! Reverses [`build_url`](super::url_builder::build_url): the escaped query is
//! decoded once to recover the plain path+query the signature covers.

use percent_encoding::percent_decode_str;

use super::signer;
use super::url_builder::ESCAPED_AMPERSAND;
use crate::error::SignError;
use crate::models::SourceConfig;

/// Verify a URL produced for `source`
///
/// # Returns
/// * `Ok(())` if the URL belongs to the source's domain and the signature matches
/// * `Err(SignError::InvalidSignature)` otherwise
pub fn verify_url(url: &str, source: &SourceConfig) -> Result<(), SignError> {
    source.validate()?;

    let (plain, signature) =
        split_signed_url(url, &source.domain).ok_or(SignError::InvalidSignature)?;

    if signer::verify_signature(&source.token, &plain, signature) {
        Ok(())
    } else {
        tracing::debug!(url, "Signature mismatch");
        Err(SignError::InvalidSignature)
    }
}

/// Split a signed URL into the plain path+query and the signature
fn split_signed_url<'a>(url: &'a str, domain: &str) -> Option<(String, &'a str)> {
    let rest = url.strip_prefix(domain)?;

    // The escaped query never holds a raw '?', so the last one starts it
    let (path, query) = rest.rsplit_once('?')?;

    if let Some(signature) = query.strip_prefix("s=") {
        return Some((path.to_string(), signature));
    }

    let marker = format!("{}s=", ESCAPED_AMPERSAND);
    let (escaped, signature) = query.rsplit_once(marker.as_str())?;
    let plain_query = percent_decode_str(escaped).decode_utf8().ok()?;

    Some((format!("{}?{}", path, plain_query), signature))
}

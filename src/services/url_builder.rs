//! Signed URL construction
//!
//! With params the signature continues the already-escaped query, joined
//! by an escaped ampersand:
//!
//! ```text
//! https://acme.imgix.net/images/jets.png?con%3D10%26s=4964d289be1d3eba495ab25d03d5c2a3
//! ```
//!
//! Without params it is the only query parameter:
//!
//! ```text
//! https://acme.imgix.net/images/jets.png?s=f57da971ac95af0f16670e1b0b0e4365
//! ```

use super::query_encoder::{escape_unreserved, PathQuery};
use super::signer::{self, SIGNATURE_PARAM};
use crate::error::SignError;
use crate::models::{Params, SourceConfig};

/// Separator before the signature when a query was built
pub(crate) const ESCAPED_AMPERSAND: &str = "%26";

/// Build a signed URL for an image hosted on the source's domain
pub fn build_url(
    path: &str,
    params: Option<&Params>,
    source: &SourceConfig,
) -> Result<String, SignError> {
    source.validate()?;

    let path_query = PathQuery::new(path, params);
    let signature = signer::sign(&source.token, &path_query.plain);

    tracing::debug!(
        path,
        params = params.map_or(0, |p| p.len()),
        domain = %source.domain,
        "Signed URL"
    );

    let separator = if path_query.has_query() {
        ESCAPED_AMPERSAND
    } else {
        "?"
    };

    Ok(format!(
        "{}{}{}{}={}",
        source.domain, path_query.escaped, separator, SIGNATURE_PARAM, signature
    ))
}

/// Build a signed URL that has the service fetch an external image.
///
/// The external URL becomes a single opaque path segment.
pub fn build_proxy_url(
    external_url: &str,
    params: Option<&Params>,
    source: &SourceConfig,
) -> Result<String, SignError> {
    build_url(&proxy_path(external_url), params, source)
}

/// `/` followed by the fully escaped external URL
pub fn proxy_path(external_url: &str) -> String {
    format!("/{}", escape_unreserved(external_url))
}

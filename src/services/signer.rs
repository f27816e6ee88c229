//! Signature computation
//!
//! ```text
//! signature = lowercase_hex(MD5(token + path_and_query))
//! ```
//!
//! MD5 is what the remote service verifies against. It acts as a keyed
//! checksum here and must stay MD5 for signatures to match.

use md5::{Digest, Md5};
use subtle::ConstantTimeEq;

/// Name of the query parameter carrying the signature
pub const SIGNATURE_PARAM: &str = "s";

/// Length of a hex-encoded MD5 digest
pub const SIGNATURE_LEN: usize = 32;

/// Compute the signature of a singly-encoded path+query
pub fn sign(token: &str, path_and_query: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(token.as_bytes());
    hasher.update(path_and_query.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a candidate signature against the expected one in constant time
pub fn verify_signature(token: &str, path_and_query: &str, signature: &str) -> bool {
    let expected = sign(token, path_and_query);
    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}

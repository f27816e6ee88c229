pub mod query_encoder;
pub mod signer;
pub mod url_builder;
pub mod url_signer;
pub mod url_verifier;

pub use query_encoder::{
    encode_query, encode_query_escaped, escape_unreserved, query_string, PathQuery,
};
pub use signer::{sign, verify_signature, SIGNATURE_LEN, SIGNATURE_PARAM};
pub use url_builder::{build_proxy_url, build_url, proxy_path};
pub use url_signer::UrlSigner;
pub use url_verifier::verify_url;

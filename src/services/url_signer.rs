use super::url_builder::{build_proxy_url, build_url};
use super::url_verifier::verify_url;
use crate::error::SignError;
use crate::models::{Params, SourceConfig};

/// URL signing service bound to one image-service account
#[derive(Debug, Clone)]
pub struct UrlSigner {
    source: SourceConfig,
}

impl UrlSigner {
    pub fn new(source: SourceConfig) -> Result<Self, SignError> {
        source.validate()?;
        Ok(Self { source })
    }

    /// Create a signer for the default source in the process environment
    pub fn from_env() -> Result<Self, SignError> {
        Self::new(SourceConfig::from_env()?)
    }

    pub fn source(&self) -> &SourceConfig {
        &self.source
    }

    /// Sign a path hosted on the source's domain
    pub fn sign(&self, path: &str, params: Option<&Params>) -> Result<String, SignError> {
        build_url(path, params, &self.source)
    }

    /// Sign a proxy URL for an external image
    pub fn proxy(&self, external_url: &str, params: Option<&Params>) -> Result<String, SignError> {
        build_proxy_url(external_url, params, &self.source)
    }

    /// Verify a URL signed for this source
    pub fn verify(&self, url: &str) -> Result<(), SignError> {
        verify_url(url, &self.source)
    }
}

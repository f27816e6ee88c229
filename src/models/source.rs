use serde::Deserialize;
use std::fmt;

use crate::error::SignError;

/// Environment variable holding the secret signing token
pub const TOKEN_VAR: &str = "PIXSIGN_TOKEN";

/// Environment variable holding the service domain (e.g. `https://acme.imgix.net`)
pub const DOMAIN_VAR: &str = "PIXSIGN_DOMAIN";

/// Credentials and base URL for one image-service account
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    /// Shared secret prepended to the signed path+query
    pub token: String,

    /// Scheme and host the signed path is appended to, without trailing slash
    pub domain: String,
}

impl SourceConfig {
    pub fn new(token: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            domain: domain.into(),
        }
    }

    /// Read the default source from `PIXSIGN_TOKEN` and `PIXSIGN_DOMAIN`
    pub fn from_env() -> Result<Self, SignError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a source from an arbitrary settings lookup.
    ///
    /// Unset and empty settings are both reported as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SignError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = non_empty(lookup(TOKEN_VAR)).ok_or(SignError::ConfigurationMissing(TOKEN_VAR))?;
        let domain =
            non_empty(lookup(DOMAIN_VAR)).ok_or(SignError::ConfigurationMissing(DOMAIN_VAR))?;

        Ok(Self { token, domain })
    }

    /// Replace token and/or domain with any non-empty values from the lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = non_empty(lookup(TOKEN_VAR)) {
            self.token = token;
        }
        if let Some(domain) = non_empty(lookup(DOMAIN_VAR)) {
            self.domain = domain;
        }
        self
    }

    pub fn validate(&self) -> Result<(), SignError> {
        if self.token.is_empty() {
            return Err(SignError::invalid_input("source token is empty"));
        }
        if self.domain.is_empty() {
            return Err(SignError::invalid_input("source domain is empty"));
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// Token stays out of logs and panic messages
impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("token", &"<redacted>")
            .field("domain", &self.domain)
            .finish()
    }
}

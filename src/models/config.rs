use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::params::{merge_params, params_from_yaml, Params};
use super::source::SourceConfig;
use crate::error::SignError;

/// Environment variable naming the YAML config file
pub const CONFIG_FILE_VAR: &str = "CONFIG_FILE";

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Source used when no source name is given
    #[serde(default = "default_source")]
    pub default_source: Option<String>,

    /// Named image-service accounts
    #[serde(default)]
    pub sources: HashMap<String, SourceConfig>,

    /// Named parameter sets, e.g. `thumb: {w: 200, h: 200}`
    #[serde(default)]
    pub presets: HashMap<String, HashMap<String, serde_yaml::Value>>,
}

fn default_source() -> Option<String> {
    Some("default".to_string())
}

impl AppConfig {
    pub fn from_yaml(content: &str) -> Result<Self, SignError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, SignError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            sources = config.sources.len(),
            presets = config.presets.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Resolve a named source, or the default source when `name` is `None`
    pub fn source(&self, name: Option<&str>) -> Result<&SourceConfig, SignError> {
        let name = name
            .or(self.default_source.as_deref())
            .ok_or(SignError::ConfigurationMissing("default_source"))?;

        self.sources
            .get(name)
            .ok_or_else(|| SignError::invalid_input(format!("unknown source: {}", name)))
    }

    /// Get a preset's parameters
    pub fn preset(&self, name: &str) -> Result<Params, SignError> {
        let raw = self
            .presets
            .get(name)
            .ok_or_else(|| SignError::invalid_input(format!("unknown preset: {}", name)))?;
        params_from_yaml(raw)
    }
}

/// Resolve the signing source.
///
/// With a config file: the named (or default) source, with any token/domain
/// from `lookup` taking precedence. Without one: the source comes from
/// `lookup` alone, and naming a source is an error.
pub fn resolve_source<F>(
    config: Option<&AppConfig>,
    name: Option<&str>,
    lookup: F,
) -> Result<SourceConfig, SignError>
where
    F: Fn(&str) -> Option<String>,
{
    match config {
        Some(config) => Ok(config.source(name)?.clone().with_overrides(lookup)),
        None if name.is_some() => Err(SignError::ConfigurationMissing(CONFIG_FILE_VAR)),
        None => SourceConfig::from_lookup(lookup),
    }
}

/// Preset params first, then `key=value` arguments on top
pub fn resolve_params(
    config: Option<&AppConfig>,
    preset: Option<&str>,
    args: &[String],
) -> Result<Option<Params>, SignError> {
    let base = match preset {
        Some(name) => config
            .ok_or(SignError::ConfigurationMissing(CONFIG_FILE_VAR))?
            .preset(name)?,
        None => Params::new(),
    };

    merge_params(base, args)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_source: default_source(),
            sources: HashMap::new(),
            presets: HashMap::new(),
        }
    }
}

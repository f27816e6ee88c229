use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignError {
    #[error("Missing required setting: {0}")]
    ConfigurationMissing(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid or missing URL signature")]
    InvalidSignature,

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SignError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SignError::InvalidInput(message.into())
    }
}

impl From<serde_yaml::Error> for SignError {
    fn from(e: serde_yaml::Error) -> Self {
        SignError::ConfigParse(e.to_string())
    }
}

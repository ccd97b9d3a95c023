use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;
use url::ParseError;
use validator::ValidationErrors;

#[derive(Debug, Error, Serialize, Deserialize, PartialEq)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Server hostname is empty")]
    EmptyHostname,

    #[error("Server hostname must not include a protocol prefix: {0}")]
    ProtocolPrefix(String),

    #[error("Server hostname must not end with a slash: {0}")]
    TrailingSlash(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<ParseError> for ConfigError {
    fn from(error: ParseError) -> Self {
        Self::InvalidUrl(error.to_string())
    }
}

impl From<JsonError> for ConfigError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

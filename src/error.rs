//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The server answered with a non-2xx status. Only the status is kept.
    #[error("Request failed with status code {status}")]
    Http { status: u16 },

    /// No response was received (DNS, refused connection, timeout, reset).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SdkError {
    /// HTTP status code, if the server responded with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Http { status } => Some(*status),
            _ => None,
        }
    }

    /// True for argument errors raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, SdkError::Validation(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, SdkError::Transport(_))
    }
}

/// Client construction errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing credentials: `{field}` is required")]
    MissingCredentials { field: &'static str },

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid header value for '{name}'")]
    InvalidHeader { name: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Per-call argument errors. Always raised before any network I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing orderId parameter")]
    MissingOrderId,

    #[error("Missing data parameter")]
    MissingDataParameter,

    #[error("Missing endpoint")]
    MissingEndpoint,

    #[error("Missing data")]
    MissingData,
}

/// XML codec errors.
#[derive(Error, Debug)]
pub enum XmlError {
    #[error("Malformed XML: {0}")]
    Parse(String),

    #[error("Invalid UTF-8 in XML: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Invalid element name '{0}'")]
    InvalidName(String),

    #[error("Failed to write XML: {0}")]
    Write(String),
}

/// Result type alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

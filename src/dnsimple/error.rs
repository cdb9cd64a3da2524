use thiserror::Error;

#[derive(Error, Debug)]
pub enum DnsimpleError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Could not find {resource} {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("Request failed with status {status}: {body}")]
    Request { status: u16, body: String },

    #[error("Invalid identifier: '{0}'")]
    InvalidIdentifier(String),

    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DnsimpleError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DnsimpleError>;

use thiserror::Error;

/// Provider client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status reported by the provider
    #[error("Provider returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for provider client operations
pub type ClientResult<T> = Result<T, ClientError>;

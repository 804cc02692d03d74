//! Error types for image generation.

/// Errors surfaced to callers of the generator.
///
/// Exactly three kinds, none retried. Transport detail is logged, never
/// carried in [`GenerateError::Failed`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerateError {
    /// No API credential was configured; no request was attempted.
    #[error("configuration error: {0}")]
    Config(String),

    /// The call succeeded but the response carried no image payload.
    #[error("no image data in response")]
    EmptyResponse,

    /// Any transport or API-level failure.
    #[error("generation failed")]
    Failed,
}

/// Failures inside a [`Transport`](super::Transport). Logged, then mapped to
/// [`GenerateError::Failed`].
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

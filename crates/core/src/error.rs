//! Error types for the Compass domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all Compass operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Model gateway errors ---
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    // --- Normalization errors ---
    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures from the outbound call to the hosted generative model.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Quota exceeded, rate limited by the API")]
    QuotaExceeded,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API request failed: {message} (status: {status_code})")]
    Api { status_code: u16, message: String },

    #[error("Model returned an empty response")]
    EmptyResponse,
}

impl ModelError {
    /// Whether this failure happened before any network I/O.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::MissingApiKey)
    }
}

/// Failures while extracting and parsing JSON from model text.
#[derive(Debug, Clone, Error)]
pub enum NormalizeError {
    #[error("No JSON object found in model reply")]
    NoJsonFound,

    #[error("Model reply did not match the expected shape: {0}")]
    Parse(String),
}

// src/error.rs

//! Unified error handling for the directory client.

use thiserror::Error;

/// Result type alias for directory operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Remote store answered with a non-success status
    #[error("API error during {context}: HTTP {status}")]
    Api { status: u16, context: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Form/data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// This profile already submitted a review for the lecturer
    #[error("Lecturer {0} was already reviewed from this profile")]
    AlreadyReviewed(String),

    /// No lecturer with the requested id exists in the store
    #[error("Lecturer {0} not found")]
    NotFound(String),
}

impl AppError {
    /// Create an API error with the operation name as context.
    pub fn api(status: u16, context: impl Into<String>) -> Self {
        Self::Api {
            status,
            context: context.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

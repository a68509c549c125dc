//! Error types

mod api;
mod validation;

pub use api::*;
pub use validation::*;

/// Top-level error type for all library operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error during an API call.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Form validation failed before anything was submitted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failed to serialize a request body.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An operation was attempted with invalid parameters.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

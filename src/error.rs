//! Error type for movie handlers.

use serde_json::{json, Value};

use crate::schema::ValidationErrors;
use crate::store::StoreError;

/// Body message for an unknown movie id.
pub const MOVIE_NOT_FOUND: &str = "Película no encontrada";

/// Body message for anything the caller cannot fix.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Error type for handler operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The body broke one or more schema rules.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    /// The request body or query string could not be parsed.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// No movie with this id.
    #[error("movie not found: {0}")]
    NotFound(String),
    /// Store failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// Response encoding failure.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Store(_) => 500,
            ApiError::Serde(_) => 500,
        }
    }

    /// The JSON body sent to the client.
    ///
    /// Validation errors keep their field list; internal failures all share
    /// one generic message.
    pub fn body(&self) -> Value {
        match self {
            ApiError::Validation(errors) => json!({ "error": errors }),
            ApiError::BadRequest(msg) => json!({ "error": msg }),
            ApiError::NotFound(_) => json!({ "error": MOVIE_NOT_FOUND }),
            ApiError::Store(_) | ApiError::Serde(_) => json!({ "error": INTERNAL_ERROR }),
        }
    }
}

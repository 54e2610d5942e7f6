//! Framework-agnostic response type for movie handlers.
//!
//! Handlers return `ApiResponse` (or an `ApiError`, which converts into one),
//! so they can be exercised without an HTTP server. The `http` module turns
//! it into an axum response.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

use crate::error::ApiError;

/// A status code plus JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: Value,
}

impl ApiResponse {
    /// Build a 200 response.
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    /// Build a 201 response.
    pub fn created(body: Value) -> Self {
        Self { status: 201, body }
    }

    /// The `{ "success": true }` acknowledgement.
    pub fn success() -> Self {
        Self::ok(json!({ "success": true }))
    }

    /// Build an error response from an `ApiError`.
    pub fn from_error(err: ApiError) -> Self {
        let status = err.status_code();
        if status >= 500 {
            error!(error = %err, "request failed");
        }
        Self {
            status,
            body: err.body(),
        }
    }
}

impl From<ApiError> for ApiResponse {
    fn from(err: ApiError) -> Self {
        Self::from_error(err)
    }
}

impl From<Result<ApiResponse, ApiError>> for ApiResponse {
    fn from(result: Result<ApiResponse, ApiError>) -> Self {
        result.unwrap_or_else(Self::from_error)
    }
}

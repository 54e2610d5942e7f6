//! Handler: partially update a movie.
//!
//! The body is validated before the id is looked up, so an invalid body
//! aimed at an unknown id is a 400, not a 404.

use serde_json::Value;
use tracing::{debug, info};

use super::to_body;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::schema;
use crate::store::MovieStore;

pub fn handle<S: MovieStore + ?Sized>(
    store: &S,
    id: &str,
    input: &Value,
) -> Result<ApiResponse, ApiError> {
    let patch = schema::validate_partial_movie(input).map_err(|errors| {
        debug!(%id, errors = errors.len(), "rejected movie update");
        errors
    })?;

    let updated = store
        .merge(id, patch)?
        .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
    let body = to_body(&updated)?;

    info!(%id, "movie updated");
    Ok(ApiResponse::ok(body))
}

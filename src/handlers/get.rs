//! Handler: fetch one movie by id.

use super::to_body;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::store::MovieStore;

pub fn handle<S: MovieStore + ?Sized>(store: &S, id: &str) -> Result<ApiResponse, ApiError> {
    let movie = store
        .find_by_id(id)?
        .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
    Ok(ApiResponse::ok(to_body(&movie)?))
}

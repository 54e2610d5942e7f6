//! Handler: delete a movie by id.

use tracing::info;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::store::MovieStore;

pub fn handle<S: MovieStore + ?Sized>(store: &S, id: &str) -> Result<ApiResponse, ApiError> {
    if !store.remove(id)? {
        return Err(ApiError::NotFound(id.to_string()));
    }
    info!(%id, "movie deleted");
    Ok(ApiResponse::success())
}

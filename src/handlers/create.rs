//! Handler: create a movie from a JSON body.
//!
//! The body must pass full validation. The id is always generated here;
//! any `id` the client sends is dropped by the schema.

use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use super::to_body;
use crate::error::ApiError;
use crate::movie::Movie;
use crate::response::ApiResponse;
use crate::schema;
use crate::store::MovieStore;

pub fn handle<S: MovieStore + ?Sized>(store: &S, input: &Value) -> Result<ApiResponse, ApiError> {
    let new = schema::validate_movie(input).map_err(|errors| {
        debug!(errors = errors.len(), "rejected movie create");
        errors
    })?;

    let id = Uuid::new_v4().to_string();
    let movie = Movie::from_new(id.clone(), new);
    let body = to_body(&movie)?;
    store.append(movie)?;

    info!(%id, "movie created");
    Ok(ApiResponse::created(body))
}

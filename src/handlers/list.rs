//! Handler: list movies, optionally filtered by genre.

use serde::Deserialize;
use tracing::debug;

use super::to_body;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::store::MovieStore;

/// Query string for `GET /movies`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub genre: Option<String>,
}

pub fn handle<S: MovieStore + ?Sized>(
    store: &S,
    query: &ListQuery,
) -> Result<ApiResponse, ApiError> {
    // An empty `?genre=` lists everything.
    let movies = match query.genre.as_deref().filter(|g| !g.is_empty()) {
        Some(genre) => store.filter_by_genre(genre)?,
        None => store.list()?,
    };
    debug!(genre = ?query.genre, count = movies.len(), "listed movies");
    Ok(ApiResponse::ok(to_body(&movies)?))
}

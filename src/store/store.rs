//! MovieStore - ordered storage for movie records.

use super::StoreError;
use crate::movie::{Movie, MoviePatch};

/// Ordered storage for movies.
///
/// Records keep insertion order. Identifier uniqueness is the caller's job:
/// `append` does not check it.
pub trait MovieStore: Send + Sync {
    /// All movies, in insertion order.
    fn list(&self) -> Result<Vec<Movie>, StoreError>;

    /// Movies with at least one genre equal to `genre`, ignoring case.
    fn filter_by_genre(&self, genre: &str) -> Result<Vec<Movie>, StoreError>;

    /// Get a movie by ID. Returns None if not found.
    fn find_by_id(&self, id: &str) -> Result<Option<Movie>, StoreError>;

    /// Add a movie at the end.
    fn append(&self, movie: Movie) -> Result<(), StoreError>;

    /// Replace the movie stored under `id`, keeping its position.
    /// Returns false if no such movie exists.
    fn replace(&self, id: &str, movie: Movie) -> Result<bool, StoreError>;

    /// Shallow-merge `patch` into the movie stored under `id` as one write,
    /// so concurrent patches never drop each other's fields.
    /// Returns the merged movie, or None if no such movie exists.
    fn merge(&self, id: &str, patch: MoviePatch) -> Result<Option<Movie>, StoreError>;

    /// Delete a movie by ID. Returns true if it existed.
    fn remove(&self, id: &str) -> Result<bool, StoreError>;
}

//! InMemoryMovieStore - Vec-backed movie store.

use std::sync::{Arc, RwLock};

use super::{MovieStore, StoreError};
use crate::movie::{Movie, MoviePatch};

/// In-memory movie store backed by a `Vec`.
///
/// Clone-friendly via Arc: clones share the same records, so one instance
/// can be handed to the router while tests keep another handle on it.
#[derive(Clone, Default)]
pub struct InMemoryMovieStore {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl InMemoryMovieStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `movies` in the given order.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: Arc::new(RwLock::new(movies)),
        }
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self
            .movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?
            .len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl MovieStore for InMemoryMovieStore {
    fn list(&self) -> Result<Vec<Movie>, StoreError> {
        let movies = self
            .movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("list"))?;
        Ok(movies.clone())
    }

    fn filter_by_genre(&self, genre: &str) -> Result<Vec<Movie>, StoreError> {
        let movies = self
            .movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("filter_by_genre"))?;
        Ok(movies
            .iter()
            .filter(|movie| movie.has_genre(genre))
            .cloned()
            .collect())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        let movies = self
            .movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("find_by_id"))?;
        Ok(movies.iter().find(|movie| movie.id == id).cloned())
    }

    fn append(&self, movie: Movie) -> Result<(), StoreError> {
        let mut movies = self
            .movies
            .write()
            .map_err(|_| StoreError::LockPoisoned("append"))?;
        movies.push(movie);
        Ok(())
    }

    fn replace(&self, id: &str, movie: Movie) -> Result<bool, StoreError> {
        let mut movies = self
            .movies
            .write()
            .map_err(|_| StoreError::LockPoisoned("replace"))?;
        match movies.iter().position(|m| m.id == id) {
            Some(index) => {
                movies[index] = movie;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn merge(&self, id: &str, patch: MoviePatch) -> Result<Option<Movie>, StoreError> {
        let mut movies = self
            .movies
            .write()
            .map_err(|_| StoreError::LockPoisoned("merge"))?;
        Ok(movies.iter_mut().find(|m| m.id == id).map(|movie| {
            *movie = movie.merged(patch);
            movie.clone()
        }))
    }

    fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut movies = self
            .movies
            .write()
            .map_err(|_| StoreError::LockPoisoned("remove"))?;
        match movies.iter().position(|m| m.id == id) {
            Some(index) => {
                movies.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

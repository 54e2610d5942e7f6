//! Movie storage.
//!
//! `MovieStore` is the contract the handlers work against; `InMemoryMovieStore`
//! is the only implementation, an ordered `Vec<Movie>` behind a lock that
//! lives as long as the process.
//!
//! ## Example
//!
//! ```ignore
//! use movies_api::store::{seed, InMemoryMovieStore, MovieStore};
//!
//! let store = InMemoryMovieStore::with_movies(seed::default_seed()?);
//! let dramas = store.filter_by_genre("drama")?;
//! ```

mod in_memory;
pub mod seed;
mod store;

pub use in_memory::InMemoryMovieStore;
pub use store::MovieStore;

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the lock.
    #[error("movie store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

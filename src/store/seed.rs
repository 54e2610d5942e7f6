//! Seed data for the movie store.
//!
//! The seed is a JSON array of movies. Only its shape is checked here (serde
//! has to be able to build a `Movie`); the schema's range rules apply to
//! writes, not to the seed. A bad record is reported by position and id.
//! Duplicate ids are rejected because the store relies on them being unique.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::movie::Movie;

/// The seed compiled into the binary.
pub const DEFAULT_SEED: &str = include_str!("../../data/movies.json");

/// Error type for seed loading.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("seed is not a JSON array: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed record {index} (id {}) is invalid: {source}", id.as_deref().unwrap_or("<none>"))]
    Record {
        index: usize,
        id: Option<String>,
        #[source]
        source: serde_json::Error,
    },
    #[error("seed contains duplicate movie id {0}")]
    DuplicateId(String),
}

/// Parse a seed document.
pub fn parse(json: &str) -> Result<Vec<Movie>, SeedError> {
    let records: Vec<Value> = serde_json::from_str(json)?;
    let movies = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let id = record.get("id").and_then(Value::as_str).map(str::to_string);
            serde_json::from_value::<Movie>(record)
                .map_err(|source| SeedError::Record { index, id, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::with_capacity(movies.len());
    for movie in &movies {
        if !seen.insert(movie.id.as_str()) {
            return Err(SeedError::DuplicateId(movie.id.clone()));
        }
    }

    Ok(movies)
}

/// Read and parse a seed file.
pub fn load(path: &Path) -> Result<Vec<Movie>, SeedError> {
    let json = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let movies = parse(&json)?;
    debug!(path = %path.display(), count = movies.len(), "loaded seed file");
    Ok(movies)
}

/// Parse the compiled-in seed.
pub fn default_seed() -> Result<Vec<Movie>, SeedError> {
    parse(DEFAULT_SEED)
}

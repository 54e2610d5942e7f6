//! In-memory movie catalogue served as a small REST API.
//!
//! The pieces, leaf-first:
//!
//! - [`movie`] — records and the typed payloads validation produces.
//! - [`schema`] — the declarative field table and its validation routine.
//! - [`store`] — the `MovieStore` trait, the in-memory store and its seed.
//! - [`handlers`] — list/get/create/update/delete, independent of HTTP.
//! - `http` — axum router, CORS and tracing layers (`http` feature).

pub mod config;
pub mod error;
pub mod handlers;
pub mod movie;
pub mod response;
pub mod schema;
pub mod store;
pub mod telemetry;

#[cfg(feature = "http")]
pub mod http;

pub use config::Config;
pub use error::ApiError;
pub use movie::{Genre, Movie, MoviePatch, NewMovie};
pub use response::ApiResponse;
pub use schema::{FieldError, ValidationErrors};
pub use store::{InMemoryMovieStore, MovieStore, StoreError};

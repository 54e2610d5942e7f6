//! HTTP transport — maps REST routes onto the movie handlers.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /movies[?genre=]` — list, optionally filtered by genre.
//!   `/movies/` is accepted as an alias for `/movies`.
//! - `GET /movies/:id` — fetch one movie.
//! - `POST /movies` — create from a JSON body.
//! - `PATCH /movies/:id` — partial update from a JSON body.
//! - `DELETE /movies/:id` — delete.
//!
//! Unknown routes answer 404 with a JSON body. Every route sits behind the
//! CORS layer and a request tracing layer.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use movies_api::{http, store::InMemoryMovieStore};
//!
//! let store = Arc::new(InMemoryMovieStore::new());
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(store.clone());
//!
//! // Or serve directly
//! http::serve(store, "0.0.0.0:1234".parse()?, std::future::pending()).await?;
//! ```

pub mod cors;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::ApiError;
use crate::handlers::{self, ListQuery};
use crate::response::ApiResponse;
use crate::store::MovieStore;

/// Build an axum `Router` serving the movie API from `store`.
pub fn router<S: MovieStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route("/movies", get(list_movies::<S>).post(create_movie::<S>))
        .route("/movies/", get(list_movies::<S>).post(create_movie::<S>))
        .route(
            "/movies/:id",
            get(get_movie::<S>)
                .patch(update_movie::<S>)
                .delete(delete_movie::<S>),
        )
        .fallback(not_found)
        .with_state(store)
        .layer(cors::layer())
        .layer(TraceLayer::new_for_http())
}

/// Serve the API at `addr` until `shutdown` resolves.
pub async fn serve<S, F>(store: Arc<S>, addr: SocketAddr, shutdown: F) -> Result<(), std::io::Error>
where
    S: MovieStore + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "movies api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ApiResponse::from_error(self).into_response()
    }
}

/// `GET /movies` — all movies, or those matching `?genre=`.
async fn list_movies<S: MovieStore + 'static>(
    State(store): State<Arc<S>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResponse {
    let result = query
        .map_err(|e| ApiError::BadRequest(e.body_text()))
        .and_then(|Query(query)| handlers::list::handle(store.as_ref(), &query));
    ApiResponse::from(result)
}

/// `GET /movies/:id`
async fn get_movie<S: MovieStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> ApiResponse {
    ApiResponse::from(handlers::get::handle(store.as_ref(), &id))
}

/// `POST /movies`
async fn create_movie<S: MovieStore + 'static>(
    State(store): State<Arc<S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResponse {
    let result = json_body(body)
        .and_then(|input| handlers::create::handle(store.as_ref(), &input));
    ApiResponse::from(result)
}

/// `PATCH /movies/:id`
async fn update_movie<S: MovieStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResponse {
    let result = json_body(body)
        .and_then(|input| handlers::update::handle(store.as_ref(), &id, &input));
    ApiResponse::from(result)
}

/// `DELETE /movies/:id`
async fn delete_movie<S: MovieStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> ApiResponse {
    ApiResponse::from(handlers::delete::handle(store.as_ref(), &id))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    body.map(|Json(input)| input)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

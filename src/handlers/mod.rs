//! Movie handlers.
//!
//! One module per operation. Each exports a `handle` function that takes the
//! store plus whatever the request carried and returns an
//! [`ApiResponse`](crate::response::ApiResponse) or an [`ApiError`]:
//!
//! | module   | route                  | success |
//! |----------|------------------------|---------|
//! | `list`   | `GET /movies?genre=`   | 200     |
//! | `get`    | `GET /movies/:id`      | 200     |
//! | `create` | `POST /movies`         | 201     |
//! | `update` | `PATCH /movies/:id`    | 200     |
//! | `delete` | `DELETE /movies/:id`   | 200     |
//!
//! Nothing here knows about HTTP; see the `http` module for the axum wiring.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use list::ListQuery;

fn to_body<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(value)?)
}

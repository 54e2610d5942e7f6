//! CORS policy for browser clients on local development ports.
//!
//! CORS is enforced by browsers. A request from an origin outside the list
//! is still served; its response simply carries no
//! `Access-Control-Allow-Origin`, so the browser withholds it from the page.

use axum::http::request::Parts;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Origins allowed to read responses cross-origin.
pub const ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:1234",
    "http://localhost:3000",
    "http://localhost:4200",
    "http://localhost:8080",
];

/// Methods advertised to preflight requests.
pub const ALLOWED_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PATCH, Method::DELETE];

/// Whether `origin` may read responses cross-origin.
pub fn is_origin_allowed(origin: &str) -> bool {
    ALLOWED_ORIGINS.contains(&origin)
}

/// Build the CORS layer. Allowed origins are echoed back; request headers
/// are mirrored on preflight. Requests without an `Origin` header never
/// reach the predicate and are served without CORS headers.
pub fn layer() -> CorsLayer {
    let allow_origin = AllowOrigin::predicate(|origin: &HeaderValue, _req: &Parts| {
        origin
            .to_str()
            .map(is_origin_allowed)
            .unwrap_or(false)
    });

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(AllowHeaders::mirror_request())
}

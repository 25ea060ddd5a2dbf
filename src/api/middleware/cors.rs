//! Permissive CORS middleware.
//!
//! The frontend is served from a different origin, so every response
//! carries `Access-Control-Allow-Origin: *` and preflights are answered
//! for `GET, POST, OPTIONS` with the `Content-Type` header allowed.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates the permissive CORS layer applied to the whole router.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

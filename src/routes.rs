//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET     /`        - Public snapshot
//! - `POST    /`        - Mutation dispatch on the body's `type` field
//! - `OPTIONS /`        - Preflight (200 empty)
//! - other verbs on `/` - 405 "Method not allowed"
//! - `GET     /health`  - Component health check
//!
//! # Middleware
//!
//! - **CORS** - permissive, on every response
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling

use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{
    dispatch_handler, health_handler, method_not_allowed_handler, preflight_handler,
    snapshot_handler,
};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route(
            "/",
            get(snapshot_handler)
                .post(dispatch_handler)
                .options(preflight_handler)
                .fallback(method_not_allowed_handler),
        )
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

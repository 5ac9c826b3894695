//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Health check and rule table sizes
//! - `/api/*`       - Classification API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Body limit** - Rejects oversized request bodies with 413
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{body_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `max_body_bytes` - request body limit applied to every route
pub fn app_router(state: AppState, max_body_bytes: usize) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(body_limit::layer(max_body_bytes))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

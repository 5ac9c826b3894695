//! API route configuration.

use crate::api::handlers::{classify_handler, rules_handler, scan_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /classify` - Classify a batch of URLs
/// - `POST /scan`     - Scan a page snapshot
/// - `GET  /rules`    - List the loaded rule tables
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/classify", post(classify_handler))
        .route("/scan", post(scan_handler))
        .route("/rules", get(rules_handler))
}

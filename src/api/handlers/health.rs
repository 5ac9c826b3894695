//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthResponse, RuleCounts};
use crate::state::AppState;

/// Returns service status and the size of the loaded rule tables.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "rules": {
///     "tracking_parameters": 41,
///     "affiliate_networks": 11,
///     "domain_categories": 8
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let rules = state.classifier.rules();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rules: RuleCounts {
            tracking_parameters: rules.tracking_definitions().len(),
            affiliate_networks: rules.affiliate_networks().len(),
            domain_categories: rules.domain_categories().len(),
        },
    })
}

//! Handler for the rule listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::rules::RulesResponse;
use crate::state::AppState;

/// Lists the tracking parameters, affiliate networks and domain categories
/// the classifier runs with.
///
/// # Endpoint
///
/// `GET /api/rules`
pub async fn rules_handler(State(state): State<AppState>) -> Json<RulesResponse> {
    Json(RulesResponse::from_rules(state.classifier.rules()))
}

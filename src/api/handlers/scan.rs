//! Handler for the page scan endpoint.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::scan::ScanRequest;
use crate::application::services::{ScanCache, ScanReport, ScanService};
use crate::domain::entities::PageSnapshot;
use crate::error::AppError;
use crate::state::AppState;

/// Scans a page snapshot and classifies every link and popup trigger.
///
/// # Endpoint
///
/// `POST /api/scan`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/landing",
///   "elements": [
///     { "tag": "a", "attributes": { "href": "#team" }, "text": "Team" },
///     { "tag": "section", "attributes": { "id": "team" }, "children": [...] }
///   ]
/// }
/// ```
///
/// # Response
///
/// A scan report with per-link verdicts in document order and a summary.
/// At most `MAX_LINKS_PER_SCAN` elements are inspected; `summary.truncated`
/// tells whether the page had more.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or the page URL is not
/// absolute. Returns 413 if the body exceeds the size limit. Returns 500 if
/// the scan task fails.
pub async fn scan_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> Result<Json<ScanReport>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let snapshot = PageSnapshot::from(payload);
    let report = run_scan(state.scan_service, snapshot).await?;

    Ok(Json(report))
}

/// Runs a scan on the blocking thread pool.
async fn run_scan(
    service: Arc<ScanService>,
    snapshot: PageSnapshot,
) -> Result<ScanReport, AppError> {
    let report = tokio::task::spawn_blocking(move || {
        let mut cache = ScanCache::new();
        service.scan_page(&snapshot, &mut cache)
    })
    .await?;

    Ok(report)
}

//! Handler for the URL classification endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use url::Url;
use validator::Validate;

use crate::api::dto::classify::{ClassifyItem, ClassifyRequest, ClassifyResponse, ClassifySummary};
use crate::error::AppError;
use crate::state::AppState;

/// Classifies a batch of URLs.
///
/// # Endpoint
///
/// `POST /api/classify`
///
/// # Request Body
///
/// ```json
/// {
///   "urls": ["https://amzn.to/3xYz?utm_source=blog", "/pricing"],
///   "base_url": "https://example.com/"   // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 2, "with_tracking": 1, "affiliate": 1 },
///   "items": [
///     {
///       "url": "https://amzn.to/3xYz?utm_source=blog",
///       "verdict": {
///         "url": "https://amzn.to/3xYz?utm_source=blog",
///         "domain": "amzn.to",
///         "domain_category": "shopping",
///         "tracking_parameters": [{ "key": "utm_source", "value": "blog", ... }],
///         "affiliate_network": "Amazon"
///       }
///     },
///     ...
///   ]
/// }
/// ```
///
/// URLs that cannot be resolved are not errors: their verdict simply has
/// no `url`, domain or tracking parameters.
///
/// # Errors
///
/// Returns 400 Bad Request if the list is empty, exceeds the configured
/// limit, or `base_url` is not an absolute URL. Returns 413 if the body
/// exceeds the size limit.
pub async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    if payload.urls.len() > state.max_urls_per_request {
        return Err(AppError::bad_request(
            "Too many URLs",
            json!({
                "max": state.max_urls_per_request,
                "received": payload.urls.len(),
            }),
        ));
    }

    let base = match payload.base_url.as_deref() {
        Some(raw) => Some(Url::parse(raw).map_err(|e| {
            AppError::bad_request("Invalid base URL", json!({ "reason": e.to_string() }))
        })?),
        None => state.default_base_url.clone(),
    };

    let mut summary = ClassifySummary {
        total: payload.urls.len(),
        ..Default::default()
    };

    let items: Vec<ClassifyItem> = payload
        .urls
        .into_iter()
        .map(|url| {
            let verdict = state.classifier.classify_url(&url, base.as_ref());
            summary.with_tracking += usize::from(verdict.has_tracking());
            summary.affiliate += usize::from(verdict.is_affiliate());
            ClassifyItem { url, verdict }
        })
        .collect();

    metrics::counter!("link_inspector_urls_classified_total").increment(items.len() as u64);
    tracing::debug!(
        total = summary.total,
        with_tracking = summary.with_tracking,
        affiliate = summary.affiliate,
        "Batch classified"
    );

    Ok(Json(ClassifyResponse { summary, items }))
}

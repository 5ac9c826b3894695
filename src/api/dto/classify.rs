//! DTOs for the URL classification endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::LinkVerdict;

/// Request to classify one or more URLs.
#[derive(Debug, Deserialize, Validate)]
pub struct ClassifyRequest {
    #[validate(length(min = 1, message = "At least one URL is required"))]
    pub urls: Vec<String>,

    /// Base for relative URLs (falls back to the configured default).
    #[validate(url(message = "Invalid base URL"))]
    pub base_url: Option<String>,
}

/// Response containing one verdict per requested URL, in request order.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub summary: ClassifySummary,
    pub items: Vec<ClassifyItem>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyItem {
    /// The URL as sent by the client.
    pub url: String,
    pub verdict: LinkVerdict,
}

/// Counters over the batch.
#[derive(Debug, Default, Serialize)]
pub struct ClassifySummary {
    pub total: usize,
    pub with_tracking: usize,
    pub affiliate: usize,
}

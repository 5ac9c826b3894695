//! DTOs for the page scan endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::{PageElement, PageSnapshot};

/// A page snapshot submitted for scanning.
///
/// Same shape as [`PageSnapshot`]; the page URL must be absolute so that
/// relative links can be resolved.
#[derive(Debug, Deserialize, Validate)]
pub struct ScanRequest {
    #[validate(url(message = "Page URL must be absolute"))]
    pub url: String,

    #[serde(default)]
    pub elements: Vec<PageElement>,
}

impl From<ScanRequest> for PageSnapshot {
    fn from(request: ScanRequest) -> Self {
        PageSnapshot::new(request.url, request.elements)
    }
}

//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub rules: RuleCounts,
}

/// Sizes of the loaded rule tables.
#[derive(Debug, Serialize)]
pub struct RuleCounts {
    pub tracking_parameters: usize,
    pub affiliate_networks: usize,
    pub domain_categories: usize,
}

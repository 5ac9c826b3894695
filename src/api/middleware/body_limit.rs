//! Request body size limit.

use axum::extract::DefaultBodyLimit;

/// Caps JSON request bodies at `max_bytes`.
///
/// Oversized bodies are rejected while extracting `Json`, which the
/// handlers turn into `413 Payload Too Large`.
pub fn layer(max_bytes: usize) -> DefaultBodyLimit {
    DefaultBodyLimit::max(max_bytes)
}

//! HTTP middleware for request processing.
//!
//! Provides request tracing and body size limits.

pub mod body_limit;
pub mod tracing;

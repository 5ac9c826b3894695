//! Utility functions for URL resolution and text handling.
//!
//! - [`url_resolver`] - Resolving link targets against a page base
//! - [`text`] - Title casing, id formatting and truncation

pub mod text;
pub mod url_resolver;

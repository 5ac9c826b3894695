//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod classify;
pub mod health;
pub mod rules;
pub mod scan;

pub use classify::classify_handler;
pub use health::health_handler;
pub use rules::rules_handler;
pub use scan::scan_handler;

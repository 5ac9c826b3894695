//! # Link Inspector
//!
//! Classifies hyperlinks: tracking parameters in the query string, affiliate
//! networks, popup triggers, in-page anchors and destination domain
//! categories. Served over HTTP with Axum and from the `inspect` CLI.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Verdict entities, the element model and the rule tables
//! - **Application Layer** ([`application`]) - Classification and page scan services
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//!
//! curl -X POST localhost:3000/api/classify \
//!   -H 'content-type: application/json' \
//!   -d '{"urls": ["https://amzn.to/3xYz?utm_source=blog"]}'
//!
//! cargo run --bin inspect -- url "https://example.com/?fbclid=abc"
//! ```
//!
//! ## Library Use
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use link_inspector::prelude::*;
//!
//! let classifier = Classifier::new(Arc::new(RuleSet::builtin()?));
//! let verdict = classifier.classify_url("https://amzn.to/x?utm_source=a", None);
//! assert_eq!(verdict.affiliate_network.as_deref(), Some("Amazon"));
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Classifier, ScanCache, ScanReport, ScanService};
    pub use crate::domain::entities::{
        Document, LinkLike, LinkVerdict, PageElement, PageIndex, PageSnapshot, TargetElement,
    };
    pub use crate::domain::rules::RuleSet;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

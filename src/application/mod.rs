//! Application layer services implementing link classification.
//!
//! Services borrow the compiled [`crate::domain::rules::RuleSet`] through a
//! shared handle and evaluate it against URLs and page elements. They hold no
//! mutable state; per-scan memoisation lives in a caller-owned
//! [`services::ScanCache`].
//!
//! # Available Services
//!
//! - [`services::classifier_service::Classifier`] - Tracking, affiliate and domain classification
//! - [`services::popup_service::PopupDetector`] - Popup-trigger heuristic
//! - [`services::anchor_service::AnchorDetector`] - In-page anchor links
//! - [`services::scan_service::ScanService`] - Whole-page scans

pub mod services;

//! Classification services for the application layer.

pub mod anchor_service;
pub mod classifier_service;
pub mod popup_service;
pub mod scan_cache;
pub mod scan_service;

pub use anchor_service::AnchorDetector;
pub use classifier_service::Classifier;
pub use popup_service::PopupDetector;
pub use scan_cache::{ScanCache, SectionInfo};
pub use scan_service::{LinkReport, ScanReport, ScanService, ScanSummary};

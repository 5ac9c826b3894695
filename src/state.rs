use std::sync::Arc;

use url::Url;

use crate::application::services::{Classifier, ScanService};
use crate::config::Config;
use crate::domain::rules::{RuleError, RuleSet};

/// State shared by every handler.
///
/// Cheap to clone: the classifier and scan service share one compiled
/// [`RuleSet`].
#[derive(Clone)]
pub struct AppState {
    pub classifier: Classifier,
    pub scan_service: Arc<ScanService>,
    /// Base applied to relative `/api/classify` inputs without a `base_url`.
    pub default_base_url: Option<Url>,
    pub max_urls_per_request: usize,
}

impl AppState {
    /// Builds the state around the built-in rule tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in rules fail to compile.
    pub fn from_config(config: &Config) -> Result<Self, RuleError> {
        let rules = Arc::new(RuleSet::builtin()?);
        let classifier = Classifier::new(rules);
        let scan_service = Arc::new(ScanService::new(
            classifier.clone(),
            config.max_links_per_scan,
        ));

        Ok(Self {
            classifier,
            scan_service,
            default_base_url: config.base_url(),
            max_urls_per_request: config.max_urls_per_request,
        })
    }
}

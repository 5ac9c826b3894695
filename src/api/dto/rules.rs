//! DTOs for the rule listing endpoint.

use serde::Serialize;

use crate::domain::entities::DomainCategory;
use crate::domain::rules::RuleSet;
use crate::domain::rules::tracking::TrackingParameterDefinition;

/// The rule tables the classifier runs with.
#[derive(Debug, Serialize)]
pub struct RulesResponse {
    pub tracking_parameters: Vec<TrackingParameterDefinition>,
    /// Display names, in match order.
    pub affiliate_networks: Vec<String>,
    pub domain_categories: Vec<DomainCategoryInfo>,
}

#[derive(Debug, Serialize)]
pub struct DomainCategoryInfo {
    pub category: DomainCategory,
    pub hosts: &'static [&'static str],
}

impl RulesResponse {
    /// Lists every table of `rules`.
    pub fn from_rules(rules: &RuleSet) -> Self {
        Self {
            tracking_parameters: rules.tracking_definitions().to_vec(),
            affiliate_networks: rules
                .affiliate_networks()
                .iter()
                .map(|network| network.name.clone())
                .collect(),
            domain_categories: rules
                .domain_categories()
                .iter()
                .map(|rule| DomainCategoryInfo {
                    category: rule.category,
                    hosts: rule.hosts,
                })
                .collect(),
        }
    }
}

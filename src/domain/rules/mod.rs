//! Rule tables and their compiled form.
//!
//! The raw tables are plain constants ([`tracking`], [`affiliate`],
//! [`popup`], [`domains`]). [`RuleSet`] compiles them once at startup,
//! after which it is only ever read, typically through an `Arc<RuleSet>`
//! shared by every request and scan.

pub mod affiliate;
pub mod domains;
pub mod popup;
pub mod tracking;

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

pub use affiliate::{AFFILIATE_NETWORKS, AffiliateNetworkRule};
pub use domains::{DOMAIN_CATEGORIES, DomainCategoryRule};
pub use tracking::{TRACKING_PARAMETERS, TrackingParameterDefinition};

use crate::utils::text::title_case;

/// Errors raised while compiling rule tables.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid pattern for {context}: {source}")]
    InvalidPattern {
        context: String,
        #[source]
        source: regex::Error,
    },

    #[error("Duplicate tracking parameter: {0}")]
    DuplicateTrackingKey(String),

    #[error("Tracking parameter key must be lowercase: {0}")]
    NonCanonicalKey(String),
}

/// An affiliate network with compiled patterns.
#[derive(Debug)]
pub struct AffiliateNetwork {
    /// Title-cased display name.
    pub name: String,
    patterns: Vec<Regex>,
}

impl AffiliateNetwork {
    pub fn matches(&self, url: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(url))
    }
}

/// Compiled popup heuristics.
#[derive(Debug)]
pub struct PopupRules {
    pub keyword: Regex,
    pub class_name: Regex,
    pub attributes: &'static [&'static str],
    pub toggle_attributes: &'static [&'static str],
    pub target_attributes: &'static [&'static str],
    pub id_attributes: &'static [&'static str],
    pub type_keywords: &'static [(&'static str, &'static [&'static str])],
    pub purpose_keywords: &'static [(&'static str, &'static [&'static str])],
}

impl PopupRules {
    fn builtin() -> Result<Self, RuleError> {
        Ok(Self {
            keyword: compile("popup keyword", popup::POPUP_KEYWORD_PATTERN)?,
            class_name: compile("popup class", popup::POPUP_CLASS_PATTERN)?,
            attributes: popup::POPUP_ATTRIBUTES,
            toggle_attributes: popup::TOGGLE_ATTRIBUTES,
            target_attributes: popup::TARGET_ATTRIBUTES,
            id_attributes: popup::ID_ATTRIBUTES,
            type_keywords: popup::TYPE_KEYWORDS,
            purpose_keywords: popup::PURPOSE_KEYWORDS,
        })
    }
}

/// Immutable, compiled rule tables.
#[derive(Debug)]
pub struct RuleSet {
    tracking: &'static [TrackingParameterDefinition],
    tracking_by_key: HashMap<&'static str, usize>,
    affiliates: Vec<AffiliateNetwork>,
    popup: PopupRules,
    domains: &'static [DomainCategoryRule],
}

impl RuleSet {
    /// Compiles the built-in tables.
    ///
    /// # Errors
    ///
    /// Only fails if a built-in table is broken; see [`RuleSet::new`].
    pub fn builtin() -> Result<Self, RuleError> {
        Self::new(TRACKING_PARAMETERS, AFFILIATE_NETWORKS, DOMAIN_CATEGORIES)
    }

    /// Compiles the given tables with the built-in popup heuristics.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::NonCanonicalKey`] for a tracking key that is not lowercase,
    /// [`RuleError::DuplicateTrackingKey`] for a key listed twice and
    /// [`RuleError::InvalidPattern`] for a pattern that does not compile.
    pub fn new(
        tracking: &'static [TrackingParameterDefinition],
        networks: &[AffiliateNetworkRule],
        domains: &'static [DomainCategoryRule],
    ) -> Result<Self, RuleError> {
        let mut tracking_by_key = HashMap::with_capacity(tracking.len());
        for (idx, definition) in tracking.iter().enumerate() {
            if definition.key != definition.key.to_ascii_lowercase() {
                return Err(RuleError::NonCanonicalKey(definition.key.to_string()));
            }
            if tracking_by_key.insert(definition.key, idx).is_some() {
                return Err(RuleError::DuplicateTrackingKey(definition.key.to_string()));
            }
        }

        let affiliates = networks
            .iter()
            .map(|rule| {
                let patterns = rule
                    .patterns
                    .iter()
                    .map(|p| compile(rule.name, p))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(AffiliateNetwork {
                    name: title_case(rule.name),
                    patterns,
                })
            })
            .collect::<Result<Vec<_>, RuleError>>()?;

        let rules = Self {
            tracking,
            tracking_by_key,
            affiliates,
            popup: PopupRules::builtin()?,
            domains,
        };

        tracing::debug!(
            tracking_parameters = rules.tracking.len(),
            affiliate_networks = rules.affiliates.len(),
            domain_categories = rules.domains.len(),
            "Rule tables compiled"
        );

        Ok(rules)
    }

    /// Looks up a tracking parameter by its lowercase key.
    pub fn tracking_definition(&self, key: &str) -> Option<&TrackingParameterDefinition> {
        self.tracking_by_key.get(key).map(|&idx| &self.tracking[idx])
    }

    /// All tracking parameters in table order.
    pub fn tracking_definitions(&self) -> &[TrackingParameterDefinition] {
        self.tracking
    }

    /// Affiliate networks in evaluation order.
    pub fn affiliate_networks(&self) -> &[AffiliateNetwork] {
        &self.affiliates
    }

    pub fn popup(&self) -> &PopupRules {
        &self.popup
    }

    pub fn domain_categories(&self) -> &[DomainCategoryRule] {
        self.domains
    }
}

fn compile(context: &str, pattern: &str) -> Result<Regex, RuleError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| RuleError::InvalidPattern {
            context: context.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TrackingCategory;

    const DUPLICATED: &[TrackingParameterDefinition] = &[
        TrackingParameterDefinition {
            key: "utm_source",
            display_name: "UTM Source",
            meaning: "",
            category: TrackingCategory::Utm,
        },
        TrackingParameterDefinition {
            key: "utm_source",
            display_name: "Again",
            meaning: "",
            category: TrackingCategory::Utm,
        },
    ];

    const UPPERCASE: &[TrackingParameterDefinition] = &[TrackingParameterDefinition {
        key: "GCLID",
        display_name: "Google Click ID",
        meaning: "",
        category: TrackingCategory::Ads,
    }];

    #[test]
    fn test_builtin_rules_compile() {
        let rules = RuleSet::builtin().unwrap();
        assert_eq!(rules.tracking_definitions().len(), TRACKING_PARAMETERS.len());
        assert_eq!(rules.affiliate_networks().len(), AFFILIATE_NETWORKS.len());
        assert_eq!(rules.domain_categories().len(), DOMAIN_CATEGORIES.len());
    }

    #[test]
    fn test_builtin_tracking_keys_are_canonical() {
        for definition in TRACKING_PARAMETERS {
            assert_eq!(definition.key, definition.key.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_tracking_lookup() {
        let rules = RuleSet::builtin().unwrap();
        let def = rules.tracking_definition("utm_source").unwrap();
        assert_eq!(def.category, TrackingCategory::Utm);
        assert!(rules.tracking_definition("UTM_SOURCE").is_none());
        assert!(rules.tracking_definition("page").is_none());
    }

    #[test]
    fn test_network_names_are_title_cased() {
        let rules = RuleSet::builtin().unwrap();
        let names: Vec<&str> = rules
            .affiliate_networks()
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names[0], "Amazon");
        assert!(names.contains(&"Commission Junction"));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = RuleSet::new(DUPLICATED, AFFILIATE_NETWORKS, DOMAIN_CATEGORIES);
        assert!(matches!(
            result.unwrap_err(),
            RuleError::DuplicateTrackingKey(key) if key == "utm_source"
        ));
    }

    #[test]
    fn test_uppercase_key_rejected() {
        let result = RuleSet::new(UPPERCASE, AFFILIATE_NETWORKS, DOMAIN_CATEGORIES);
        assert!(matches!(
            result.unwrap_err(),
            RuleError::NonCanonicalKey(_)
        ));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let broken = [AffiliateNetworkRule {
            name: "broken",
            patterns: &[r"(unclosed"],
        }];
        let result = RuleSet::new(TRACKING_PARAMETERS, &broken, DOMAIN_CATEGORIES);
        let err = result.unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let rules = RuleSet::builtin().unwrap();
        assert!(rules.affiliate_networks()[0].matches("HTTPS://AMZN.TO/abc"));
        assert!(rules.popup().keyword.is_match("#Newsletter-MODAL"));
    }
}

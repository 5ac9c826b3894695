//! Classification results.

use std::fmt;

use serde::Serialize;

/// Group a tracking parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingCategory {
    /// Urchin campaign parameters (`utm_*`).
    Utm,
    /// Ad-platform click identifiers.
    Ads,
    /// Analytics and referral identifiers.
    Tracking,
    /// Email-marketing identifiers.
    Email,
}

impl TrackingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utm => "utm",
            Self::Ads => "ads",
            Self::Tracking => "tracking",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for TrackingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a link's destination domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainCategory {
    Search,
    Social,
    Video,
    News,
    Shopping,
    Development,
    Email,
    Reference,
}

impl DomainCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Social => "social",
            Self::Video => "video",
            Self::News => "news",
            Self::Shopping => "shopping",
            Self::Development => "development",
            Self::Email => "email",
            Self::Reference => "reference",
        }
    }
}

impl fmt::Display for DomainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognised tracking parameter found in a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingMatch {
    /// The key as written in the URL (original case).
    pub key: String,
    pub value: String,
    pub display_name: String,
    pub meaning: String,
    pub category: TrackingCategory,
}

/// What a popup trigger opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupInfo {
    /// Widget kind: `modal`, `lightbox`, `drawer`, ... or `popup`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Best-effort purpose: `newsletter`, `login`, ... or `general`.
    pub purpose: String,
    pub description: String,
    /// Id of the controlled element, when it could be resolved.
    pub target_id: Option<String>,
}

/// An in-page fragment link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchorInfo {
    pub target_id: String,
    pub target_found: bool,
    pub section_title: Option<String>,
}

/// Full verdict for a single link.
///
/// Every "nothing found" outcome is represented here as an empty list or a
/// `None`; classification never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkVerdict {
    /// Absolute URL the link resolves to, when it could be resolved.
    pub url: Option<String>,
    pub domain: Option<String>,
    pub domain_category: Option<DomainCategory>,
    pub tracking_parameters: Vec<TrackingMatch>,
    pub affiliate_network: Option<String>,
    pub popup: Option<PopupInfo>,
    pub anchor: Option<AnchorInfo>,
}

impl LinkVerdict {
    pub fn has_tracking(&self) -> bool {
        !self.tracking_parameters.is_empty()
    }

    pub fn is_affiliate(&self) -> bool {
        self.affiliate_network.is_some()
    }

    pub fn is_popup_trigger(&self) -> bool {
        self.popup.is_some()
    }

    pub fn is_anchor(&self) -> bool {
        self.anchor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_verdict_is_negative() {
        let verdict = LinkVerdict::default();
        assert!(!verdict.has_tracking());
        assert!(!verdict.is_affiliate());
        assert!(!verdict.is_popup_trigger());
        assert!(!verdict.is_anchor());
    }

    #[test]
    fn test_popup_kind_serializes_as_type() {
        let info = PopupInfo {
            kind: "modal".to_string(),
            purpose: "newsletter".to_string(),
            description: "Join us".to_string(),
            target_id: None,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "modal");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_categories_serialize_lowercase() {
        assert_eq!(serde_json::to_value(TrackingCategory::Utm).unwrap(), "utm");
        assert_eq!(
            serde_json::to_value(DomainCategory::Development).unwrap(),
            "development"
        );
        assert_eq!(TrackingCategory::Email.to_string(), "email");
    }
}

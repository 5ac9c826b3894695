//! Link classification service.

use std::sync::Arc;

use url::Url;

use crate::application::services::{AnchorDetector, PopupDetector, ScanCache};
use crate::domain::entities::{Document, DomainCategory, LinkLike, LinkVerdict, TrackingMatch};
use crate::domain::rules::RuleSet;
use crate::utils::url_resolver::{normalized_host, resolve_url};

/// Evaluates the rule tables against URLs and page elements.
///
/// Cheap to clone; the compiled rules are shared.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Arc<RuleSet>,
}

impl Classifier {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Lists the known tracking parameters of `input`, in query-string order.
    ///
    /// Keys are matched case-insensitively; the match keeps the key as
    /// written. A URL that cannot be resolved has no tracking parameters.
    pub fn tracking_parameters(&self, input: &str, base: Option<&Url>) -> Vec<TrackingMatch> {
        match resolve_url(input, base) {
            Ok(url) => self.tracking_in(&url),
            Err(e) => {
                tracing::debug!(url = input, error = %e, "Skipping tracking check for unresolvable URL");
                Vec::new()
            }
        }
    }

    /// Returns the display name of the first affiliate network matching `url`.
    pub fn affiliate_network(&self, url: &str) -> Option<String> {
        self.rules
            .affiliate_networks()
            .iter()
            .find(|network| network.matches(url))
            .map(|network| network.name.clone())
    }

    /// Categorises a host by exact or parent-domain match.
    pub fn domain_category(&self, host: &str) -> Option<DomainCategory> {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        let host = host.strip_prefix("www.").unwrap_or(&host);

        self.rules
            .domain_categories()
            .iter()
            .find(|rule| {
                rule.hosts.iter().any(|candidate| {
                    host == *candidate
                        || host
                            .strip_suffix(candidate)
                            .is_some_and(|prefix| prefix.ends_with('.'))
                })
            })
            .map(|rule| rule.category)
    }

    /// Classifies a bare URL.
    ///
    /// Relative URLs are resolved against `base`. An unresolvable URL yields
    /// a verdict with only the affiliate check applied to the raw string.
    pub fn classify_url(&self, input: &str, base: Option<&Url>) -> LinkVerdict {
        let url = match resolve_url(input, base) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!(url = input, error = %e, "URL could not be resolved");
                return LinkVerdict {
                    affiliate_network: self.affiliate_network(input),
                    ..Default::default()
                };
            }
        };

        let domain = normalized_host(&url);
        let domain_category = domain.as_deref().and_then(|d| self.domain_category(d));

        LinkVerdict {
            url: Some(url.to_string()),
            domain_category,
            domain,
            tracking_parameters: self.tracking_in(&url),
            affiliate_network: self.affiliate_network(url.as_str()),
            popup: None,
            anchor: None,
        }
    }

    /// Classifies a page element: URL rules on its `href`, plus popup and
    /// anchor detection against `document`. Popup triggers are not reported
    /// as anchor links.
    pub fn classify_link(
        &self,
        link: &dyn LinkLike,
        document: &dyn Document,
        cache: &mut ScanCache,
    ) -> LinkVerdict {
        let mut verdict = link
            .href()
            .map(|href| self.classify_url(href, document.base_url()))
            .unwrap_or_default();

        verdict.popup = PopupDetector::new(self.rules.popup()).detect(link, document, cache);
        if verdict.popup.is_none() {
            verdict.anchor = AnchorDetector::new().detect(link, document, cache);
        }

        verdict
    }

    fn tracking_in(&self, url: &Url) -> Vec<TrackingMatch> {
        url.query_pairs()
            .filter_map(|(key, value)| {
                let definition = self.rules.tracking_definition(&key.to_ascii_lowercase())?;
                Some(TrackingMatch {
                    key: key.into_owned(),
                    value: value.into_owned(),
                    display_name: definition.display_name.to_string(),
                    meaning: definition.meaning.to_string(),
                    category: definition.category,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{PageElement, PageIndex, PageSnapshot, TrackingCategory};

    fn classifier() -> Classifier {
        Classifier::new(Arc::new(RuleSet::builtin().unwrap()))
    }

    #[test]
    fn test_utm_source_reported_as_utm() {
        let c = classifier();
        let found = c.tracking_parameters("https://example.com/?utm_source=newsletter", None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "utm_source");
        assert_eq!(found[0].value, "newsletter");
        assert_eq!(found[0].category, TrackingCategory::Utm);
        assert_eq!(found[0].display_name, "UTM Source");
    }

    #[test]
    fn test_tracking_order_follows_query() {
        let c = classifier();
        let found = c.tracking_parameters(
            "https://example.com/p?fbclid=abc&page=2&utm_medium=social&mc_eid=42",
            None,
        );
        let keys: Vec<&str> = found.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["fbclid", "utm_medium", "mc_eid"]);
        assert_eq!(found[0].category, TrackingCategory::Ads);
        assert_eq!(found[2].category, TrackingCategory::Email);
    }

    #[test]
    fn test_tracking_key_case_insensitive_keeps_original() {
        let c = classifier();
        let found = c.tracking_parameters("https://example.com/?UTM_Campaign=spring%20sale", None);
        assert_eq!(found[0].key, "UTM_Campaign");
        assert_eq!(found[0].value, "spring sale");
    }

    #[test]
    fn test_tracking_repeated_key_reported_each_time() {
        let c = classifier();
        let found = c.tracking_parameters("https://example.com/?ref=a&ref=b", None);
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].value, "b");
    }

    #[test]
    fn test_tracking_relative_with_base() {
        let c = classifier();
        let base = Url::parse("https://example.com/blog/").unwrap();
        let found = c.tracking_parameters("/landing?gclid=xyz", Some(&base));
        assert_eq!(found[0].key, "gclid");
    }

    #[test]
    fn test_tracking_malformed_url_is_empty() {
        let c = classifier();
        assert!(c.tracking_parameters("http://exa mple.com/?utm_source=x", None).is_empty());
        assert!(c.tracking_parameters("/relative?utm_source=x", None).is_empty());
        assert!(c.tracking_parameters("", None).is_empty());
    }

    #[test]
    fn test_amazon_short_link() {
        let c = classifier();
        assert_eq!(c.affiliate_network("https://amzn.to/3xYz").as_deref(), Some("Amazon"));
    }

    #[test]
    fn test_amazon_tagged_product() {
        let c = classifier();
        assert_eq!(
            c.affiliate_network("https://www.amazon.co.uk/dp/B000?tag=blog-21").as_deref(),
            Some("Amazon")
        );
        assert!(c.affiliate_network("https://www.amazon.com/dp/B000").is_none());
    }

    #[test]
    fn test_other_networks() {
        let c = classifier();
        assert_eq!(
            c.affiliate_network("https://www.anrdoezrs.net/click-123-456").as_deref(),
            Some("Commission Junction")
        );
        assert_eq!(
            c.affiliate_network("https://click.linksynergy.com/deeplink?id=abc").as_deref(),
            Some("Rakuten")
        );
        assert_eq!(
            c.affiliate_network("https://shop.example/?awinmid=1234&awinaffid=5").as_deref(),
            Some("Awin")
        );
    }

    #[test]
    fn test_affiliate_case_insensitive() {
        let c = classifier();
        assert_eq!(c.affiliate_network("HTTPS://AMZN.TO/ABC").as_deref(), Some("Amazon"));
    }

    #[test]
    fn test_no_affiliate() {
        let c = classifier();
        assert!(c.affiliate_network("https://example.com/about").is_none());
    }

    #[test]
    fn test_domain_category_exact_and_subdomain() {
        let c = classifier();
        assert_eq!(c.domain_category("github.com"), Some(DomainCategory::Development));
        assert_eq!(c.domain_category("gist.github.com"), Some(DomainCategory::Development));
        assert_eq!(c.domain_category("WWW.YouTube.com"), Some(DomainCategory::Video));
        assert_eq!(c.domain_category("mail.google.com"), Some(DomainCategory::Email));
        assert_eq!(c.domain_category("en.wikipedia.org"), Some(DomainCategory::Reference));
    }

    #[test]
    fn test_domain_category_requires_label_boundary() {
        let c = classifier();
        assert!(c.domain_category("notgithub.com").is_none());
        assert!(c.domain_category("example.org").is_none());
    }

    #[test]
    fn test_plain_url_has_empty_verdict() {
        let c = classifier();
        let verdict = c.classify_url("https://example.com/about?page=2", None);
        assert!(verdict.tracking_parameters.is_empty());
        assert!(verdict.affiliate_network.is_none());
        assert!(verdict.popup.is_none());
        assert_eq!(verdict.domain.as_deref(), Some("example.com"));
        assert!(verdict.domain_category.is_none());
    }

    #[test]
    fn test_classify_url_combines_rules() {
        let c = classifier();
        let verdict = c.classify_url("https://amzn.to/abc?utm_source=blog", None);
        assert!(verdict.has_tracking());
        assert_eq!(verdict.affiliate_network.as_deref(), Some("Amazon"));
        assert_eq!(verdict.domain_category, Some(DomainCategory::Shopping));
        assert_eq!(verdict.url.as_deref(), Some("https://amzn.to/abc?utm_source=blog"));
    }

    #[test]
    fn test_classify_malformed_url() {
        let c = classifier();
        let verdict = c.classify_url("http://exa mple.com/?utm_source=x", None);
        assert!(verdict.url.is_none());
        assert!(verdict.tracking_parameters.is_empty());
        assert!(verdict.domain.is_none());
    }

    #[test]
    fn test_classify_is_idempotent() {
        let c = classifier();
        let url = "https://amzn.to/x?utm_source=a&fbclid=b";
        assert_eq!(c.classify_url(url, None), c.classify_url(url, None));
    }

    #[test]
    fn test_classify_link_uses_document_base() {
        let c = classifier();
        let page = PageSnapshot::new(
            "https://example.com/post",
            vec![PageElement::new("a").attr("href", "/go?utm_campaign=x")],
        );
        let index = PageIndex::new(&page);
        let mut cache = ScanCache::new();

        let verdict = c.classify_link(&page.elements[0], &index, &mut cache);
        assert_eq!(verdict.url.as_deref(), Some("https://example.com/go?utm_campaign=x"));
        assert_eq!(verdict.tracking_parameters[0].key, "utm_campaign");
        assert!(verdict.popup.is_none());
        assert!(verdict.anchor.is_none());
    }

    #[test]
    fn test_classify_link_without_href() {
        let c = classifier();
        let page = PageSnapshot::new("https://example.com/", vec![PageElement::new("button")]);
        let index = PageIndex::new(&page);
        let mut cache = ScanCache::new();

        let verdict = c.classify_link(&page.elements[0], &index, &mut cache);
        assert_eq!(verdict, LinkVerdict::default());
    }

    #[test]
    fn test_popup_trigger_is_not_anchor() {
        let c = classifier();
        let page = PageSnapshot::new(
            "https://example.com/",
            vec![
                PageElement::new("a").attr("href", "#newsletter-modal"),
                PageElement::new("div").attr("id", "newsletter-modal"),
                PageElement::new("a").attr("href", "#faq"),
            ],
        );
        let index = PageIndex::new(&page);
        let mut cache = ScanCache::new();

        let trigger = c.classify_link(&page.elements[0], &index, &mut cache);
        assert!(trigger.is_popup_trigger());
        assert!(!trigger.is_anchor());

        let anchor = c.classify_link(&page.elements[2], &index, &mut cache);
        assert!(!anchor.is_popup_trigger());
        assert_eq!(anchor.anchor.unwrap().target_id, "faq");
    }
}

//! In-page anchor link detection.

use crate::application::services::ScanCache;
use crate::domain::entities::{AnchorInfo, Document, LinkLike};
use crate::utils::url_resolver::local_fragment;

/// Detects links that jump to a fragment of the current document.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnchorDetector;

impl AnchorDetector {
    pub fn new() -> Self {
        Self
    }

    /// Id of the element `link` jumps to, if it is an in-page link.
    pub fn target_id(&self, link: &dyn LinkLike, document: &dyn Document) -> Option<String> {
        link.href()
            .and_then(|href| local_fragment(href, document.base_url()))
    }

    /// Anchor verdict for `link`. A missing target is reported with
    /// `target_found = false` rather than dropped.
    pub fn detect(
        &self,
        link: &dyn LinkLike,
        document: &dyn Document,
        cache: &mut ScanCache,
    ) -> Option<AnchorInfo> {
        let target_id = self.target_id(link, document)?;

        let info = match document.element_by_id(&target_id) {
            Some(element) => AnchorInfo {
                section_title: cache
                    .section(&target_id, element)
                    .title()
                    .map(str::to_string),
                target_found: true,
                target_id,
            },
            None => {
                tracing::trace!(target = %target_id, "Anchor target not found");
                AnchorInfo {
                    target_id,
                    target_found: false,
                    section_title: None,
                }
            }
        };

        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{PageElement, PageIndex, PageSnapshot};

    fn detect(page: &PageSnapshot, link: &PageElement) -> Option<AnchorInfo> {
        let index = PageIndex::new(page);
        let mut cache = ScanCache::new();
        AnchorDetector::new().detect(link, &index, &mut cache)
    }

    #[test]
    fn test_section_title_from_formatted_id() {
        let link = PageElement::new("a").attr("href", "#our-team-section");
        let section = PageElement::new("section").attr("id", "our-team-section");
        let page = PageSnapshot::new("https://example.com/", vec![link.clone(), section]);

        let info = detect(&page, &link).unwrap();
        assert!(info.target_found);
        assert_eq!(info.section_title.as_deref(), Some("Our Team Section"));
    }

    #[test]
    fn test_section_title_from_heading() {
        let link = PageElement::new("a").attr("href", "#pricing");
        let section = PageElement::new("section")
            .attr("id", "pricing")
            .child(PageElement::new("h2").text("Plans & Pricing"));
        let page = PageSnapshot::new("https://example.com/", vec![link.clone(), section]);

        let info = detect(&page, &link).unwrap();
        assert_eq!(info.section_title.as_deref(), Some("Plans & Pricing"));
    }

    #[test]
    fn test_missing_target() {
        let link = PageElement::new("a").attr("href", "#gone");
        let page = PageSnapshot::new("https://example.com/", vec![link.clone()]);

        let info = detect(&page, &link).unwrap();
        assert_eq!(info.target_id, "gone");
        assert!(!info.target_found);
        assert!(info.section_title.is_none());
    }

    #[test]
    fn test_absolute_same_page_link() {
        let link = PageElement::new("a").attr("href", "https://example.com/docs#install");
        let section = PageElement::new("div").attr("id", "install");
        let page = PageSnapshot::new("https://example.com/docs", vec![link.clone(), section]);

        let info = detect(&page, &link).unwrap();
        assert_eq!(info.target_id, "install");
        assert!(info.target_found);
    }

    #[test]
    fn test_external_fragment_is_not_anchor() {
        let link = PageElement::new("a").attr("href", "https://other.com/docs#install");
        let page = PageSnapshot::new("https://example.com/docs", vec![link.clone()]);
        assert!(detect(&page, &link).is_none());
    }

    #[test]
    fn test_plain_hash_is_not_anchor() {
        let link = PageElement::new("a").attr("href", "#");
        let page = PageSnapshot::new("https://example.com/", vec![link.clone()]);
        assert!(detect(&page, &link).is_none());
    }
}

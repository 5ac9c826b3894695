//! Per-scan memoisation of target-element information.
//!
//! Several triggers and anchors on a page often point at the same section or
//! modal. Describing a target walks its subtree, so a scan keeps the result
//! per target id in a [`ScanCache`]. The cache is owned by the scan that
//! created it and is never invalidated on its own: reuse across scans
//! requires an explicit [`ScanCache::clear`].

use std::collections::HashMap;

use crate::domain::entities::TargetElement;
use crate::domain::rules::popup::{DEFAULT_POPUP_DESCRIPTION, DESCRIPTION_MAX_CHARS};
use crate::utils::text::{collapse_whitespace, format_element_id, truncate_chars};

/// Everything the detectors need to know about a target element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionInfo {
    pub id: Option<String>,
    /// `aria-label`, else `title`, else the first heading.
    pub label: Option<String>,
    /// First paragraph, truncated.
    pub paragraph: Option<String>,
    pub formatted_id: Option<String>,
    /// Lowercase class list and id, for type keywords.
    pub class_and_id: String,
    /// Lowercase text and attribute values, for purpose keywords.
    pub content: String,
}

impl SectionInfo {
    pub fn from_element(element: &dyn TargetElement) -> Self {
        let label = non_empty(element.attribute("aria-label"))
            .or_else(|| non_empty(element.attribute("title")))
            .or_else(|| element.first_heading());

        let paragraph = element
            .first_paragraph()
            .map(|p| truncate_chars(&p, DESCRIPTION_MAX_CHARS));

        let id = element.id().map(str::to_string);
        let formatted_id = id
            .as_deref()
            .map(format_element_id)
            .filter(|s| !s.is_empty());

        let class_and_id =
            format!("{} {}", element.class_name(), id.as_deref().unwrap_or("")).to_lowercase();

        let mut content = element.text_content();
        for (_, value) in element.attributes() {
            content.push(' ');
            content.push_str(value);
        }

        Self {
            id,
            label,
            paragraph,
            formatted_id,
            class_and_id,
            content: content.to_lowercase(),
        }
    }

    /// Section title: label, else formatted id.
    pub fn title(&self) -> Option<&str> {
        self.label.as_deref().or(self.formatted_id.as_deref())
    }

    /// Popup description: label, paragraph, formatted id, then a fixed default.
    pub fn description(&self) -> &str {
        self.label
            .as_deref()
            .or(self.paragraph.as_deref())
            .or(self.formatted_id.as_deref())
            .unwrap_or(DEFAULT_POPUP_DESCRIPTION)
    }
}

/// Caller-owned cache of [`SectionInfo`] keyed by target id.
#[derive(Debug, Default)]
pub struct ScanCache {
    sections: HashMap<String, SectionInfo>,
    hits: usize,
    misses: usize,
}

impl ScanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached info for `id`, describing `element` on first use.
    pub fn section(&mut self, id: &str, element: &dyn TargetElement) -> &SectionInfo {
        if self.sections.contains_key(id) {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.sections
                .insert(id.to_string(), SectionInfo::from_element(element));
        }
        &self.sections[id]
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Drops every entry and resets the counters.
    pub fn clear(&mut self) {
        self.sections.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(collapse_whitespace)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PageElement;

    #[test]
    fn test_label_prefers_aria_label() {
        let el = PageElement::new("div")
            .attr("id", "signup")
            .attr("aria-label", "Newsletter signup")
            .attr("title", "Ignored")
            .child(PageElement::new("h2").text("Also ignored"));
        let info = SectionInfo::from_element(&el);
        assert_eq!(info.label.as_deref(), Some("Newsletter signup"));
        assert_eq!(info.description(), "Newsletter signup");
    }

    #[test]
    fn test_label_falls_back_to_title_then_heading() {
        let titled = PageElement::new("div").attr("title", "Sign in");
        assert_eq!(SectionInfo::from_element(&titled).label.as_deref(), Some("Sign in"));

        let headed = PageElement::new("div")
            .attr("aria-label", "   ")
            .child(PageElement::new("h3").text("Your cart"));
        assert_eq!(SectionInfo::from_element(&headed).label.as_deref(), Some("Your cart"));
    }

    #[test]
    fn test_description_uses_paragraph_before_id() {
        let el = PageElement::new("div")
            .attr("id", "promo-box")
            .child(PageElement::new("p").text("Get 10% off today"));
        let info = SectionInfo::from_element(&el);
        assert_eq!(info.description(), "Get 10% off today");
        assert_eq!(info.title(), Some("Promo Box"));
    }

    #[test]
    fn test_paragraph_is_truncated() {
        let el = PageElement::new("div").child(PageElement::new("p").text("x".repeat(300)));
        let info = SectionInfo::from_element(&el);
        let paragraph = info.paragraph.as_ref().unwrap();
        assert_eq!(paragraph.chars().count(), 100);
        assert!(paragraph.ends_with("..."));
    }

    #[test]
    fn test_formatted_id_title() {
        let el = PageElement::new("section").attr("id", "our-team-section");
        let info = SectionInfo::from_element(&el);
        assert_eq!(info.title(), Some("Our Team Section"));
        assert_eq!(info.description(), "Our Team Section");
    }

    #[test]
    fn test_default_description() {
        let el = PageElement::new("div");
        let info = SectionInfo::from_element(&el);
        assert!(info.title().is_none());
        assert_eq!(info.description(), "Popup content");
    }

    #[test]
    fn test_content_includes_attributes_lowercased() {
        let el = PageElement::new("div")
            .attr("class", "Modal Newsletter")
            .attr("id", "Box")
            .text("Subscribe NOW");
        let info = SectionInfo::from_element(&el);
        assert!(info.content.contains("subscribe now"));
        assert!(info.content.contains("modal newsletter"));
        assert_eq!(info.class_and_id, "modal newsletter box");
    }

    #[test]
    fn test_cache_hits_and_clear() {
        let el = PageElement::new("div").attr("id", "team");
        let mut cache = ScanCache::new();

        assert_eq!(cache.section("team", &el).formatted_id.as_deref(), Some("Team"));
        cache.section("team", &el);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
    }

    #[test]
    fn test_cache_is_not_invalidated_automatically() {
        let before = PageElement::new("div").attr("id", "team").attr("title", "Before");
        let after = PageElement::new("div").attr("id", "team").attr("title", "After");
        let mut cache = ScanCache::new();

        cache.section("team", &before);
        assert_eq!(cache.section("team", &after).label.as_deref(), Some("Before"));

        cache.clear();
        assert_eq!(cache.section("team", &after).label.as_deref(), Some("After"));
    }
}

//! Popup-trigger detection.
//!
//! # Detection
//!
//! An element is a popup trigger when any of these holds:
//!
//! 1. its `href` or id names a popup widget (`#newsletter-modal`, `javascript:openPopup()`)
//! 2. it carries a popup attribute (`data-fancybox`, `data-micromodal-trigger`, ...)
//!    or a framework toggle naming a popup (`data-bs-toggle="modal"`)
//! 3. its class list contains a popup keyword (`open-modal`, `js-lightbox`)
//! 4. it is a `role="button"` whose `aria-controls` names a popup widget
//!
//! # Classification
//!
//! The controlled element is looked up through the href fragment,
//! `aria-controls`, `data-target`/`data-bs-target` and finally
//! `data-popup`/`data-modal`. Type and purpose are read from ordered keyword
//! dictionaries; the first dictionary entry with a matching keyword wins.

use crate::application::services::scan_cache::{ScanCache, SectionInfo};
use crate::domain::entities::{Document, LinkLike, PopupInfo, TargetElement};
use crate::domain::rules::PopupRules;
use crate::domain::rules::popup::{
    DEFAULT_POPUP_DESCRIPTION, DEFAULT_POPUP_PURPOSE, DEFAULT_POPUP_TYPE,
};
use crate::utils::url_resolver::local_fragment;

/// Popup heuristics bound to a compiled rule set.
pub struct PopupDetector<'r> {
    rules: &'r PopupRules,
}

impl<'r> PopupDetector<'r> {
    pub fn new(rules: &'r PopupRules) -> Self {
        Self { rules }
    }

    /// Returns true if activating `link` most likely opens a popup.
    pub fn is_popup_trigger(&self, link: &dyn LinkLike) -> bool {
        let keyword = &self.rules.keyword;

        let by_href_or_id = link.href().is_some_and(|h| keyword.is_match(h))
            || link.id().is_some_and(|id| keyword.is_match(id));

        let by_attribute = self
            .rules
            .attributes
            .iter()
            .any(|name| link.attribute(name).is_some())
            || self
                .rules
                .toggle_attributes
                .iter()
                .filter_map(|name| link.attribute(name))
                .any(|value| keyword.is_match(value));

        let by_class = self.rules.class_name.is_match(link.class_name());

        let by_role = link
            .attribute("role")
            .is_some_and(|role| role.trim().eq_ignore_ascii_case("button"))
            && link
                .attribute("aria-controls")
                .is_some_and(|controls| keyword.is_match(controls));

        by_href_or_id || by_attribute || by_class || by_role
    }

    /// Resolves the element `link` opens, trying each lookup in turn.
    pub fn find_popup_element<'d>(
        &self,
        link: &dyn LinkLike,
        document: &'d dyn Document,
    ) -> Option<&'d dyn TargetElement> {
        self.candidate_ids(link, document)
            .into_iter()
            .find_map(|id| document.element_by_id(&id))
    }

    /// Full popup verdict for `link`, or `None` if it is not a trigger.
    pub fn detect(
        &self,
        link: &dyn LinkLike,
        document: &dyn Document,
        cache: &mut ScanCache,
    ) -> Option<PopupInfo> {
        if !self.is_popup_trigger(link) {
            return None;
        }

        let section = self
            .find_popup_element(link, document)
            .and_then(|el| el.id().map(|id| cache.section(id, el).clone()));

        let kind = self.popup_type(link, section.as_ref());
        let purpose = self.popup_purpose(link, section.as_ref());

        tracing::trace!(
            kind,
            purpose,
            target = section.as_ref().and_then(|s| s.id.as_deref()),
            "Popup trigger detected"
        );

        Some(PopupInfo {
            kind: kind.to_string(),
            purpose: purpose.to_string(),
            description: section
                .as_ref()
                .map(|s| s.description().to_string())
                .unwrap_or_else(|| DEFAULT_POPUP_DESCRIPTION.to_string()),
            target_id: section.and_then(|s| s.id),
        })
    }

    /// Ids that may name the controlled element, in lookup order.
    fn candidate_ids(&self, link: &dyn LinkLike, document: &dyn Document) -> Vec<String> {
        let mut ids = Vec::new();

        if let Some(fragment) = link
            .href()
            .and_then(|href| local_fragment(href, document.base_url()))
        {
            ids.push(fragment);
        }

        if let Some(controls) = link.attribute("aria-controls") {
            ids.extend(controls.split_whitespace().next().map(str::to_string));
        }

        for name in self.rules.target_attributes {
            if let Some(id) = link.attribute(name).and_then(selector_id) {
                ids.push(id);
            }
        }

        for name in self.rules.id_attributes {
            if let Some(value) = link.attribute(name) {
                let id = value.trim().trim_start_matches('#');
                if !id.is_empty() {
                    ids.push(id.to_string());
                }
            }
        }

        ids
    }

    fn popup_type(&self, link: &dyn LinkLike, section: Option<&SectionInfo>) -> &'static str {
        let haystack = format!(
            "{} {} {} {}",
            section.map(|s| s.class_and_id.as_str()).unwrap_or(""),
            link.class_name(),
            link.href().unwrap_or(""),
            link.attribute("aria-controls").unwrap_or(""),
        )
        .to_lowercase();

        first_match(self.rules.type_keywords, &haystack).unwrap_or(DEFAULT_POPUP_TYPE)
    }

    fn popup_purpose(&self, link: &dyn LinkLike, section: Option<&SectionInfo>) -> &'static str {
        let haystack = format!(
            "{} {} {}",
            section.map(|s| s.content.as_str()).unwrap_or(""),
            link.text_content(),
            link.href().unwrap_or(""),
        )
        .to_lowercase();

        first_match(self.rules.purpose_keywords, &haystack).unwrap_or(DEFAULT_POPUP_PURPOSE)
    }
}

/// First dictionary label with a keyword contained in `haystack`.
fn first_match(
    dictionary: &'static [(&'static str, &'static [&'static str])],
    haystack: &str,
) -> Option<&'static str> {
    dictionary
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k)))
        .map(|(label, _)| *label)
}

/// Extracts an id from an id selector (`#signup` or a bare `signup`).
fn selector_id(selector: &str) -> Option<String> {
    let selector = selector.trim();
    let id = selector.strip_prefix('#').unwrap_or(selector);

    let is_plain_id = !id.is_empty()
        && !id.starts_with('.')
        && !id.contains(|c: char| c.is_whitespace() || matches!(c, '#' | '[' | ',' | '>'));

    is_plain_id.then(|| id.to_string())
}

//! Whole-page scans.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::{Classifier, PopupDetector, ScanCache};
use crate::domain::entities::{LinkLike, LinkVerdict, PageElement, PageIndex, PageSnapshot};
use crate::utils::text::truncate_chars;

/// Maximum characters of link text carried in a report.
const LINK_TEXT_MAX_CHARS: usize = 200;

/// Verdict for one element of a scanned page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    /// Position among the inspected elements, in document order.
    pub index: usize,
    pub tag: String,
    pub href: Option<String>,
    pub text: String,
    pub verdict: LinkVerdict,
}

/// Counters over a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub total: usize,
    pub with_tracking: usize,
    pub affiliate: usize,
    pub popup_triggers: usize,
    pub anchors: usize,
    /// True when the page had more candidates than the scan limit.
    pub truncated: bool,
}

/// Result of scanning a page.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub page_url: String,
    pub scanned_at: DateTime<Utc>,
    pub summary: ScanSummary,
    pub links: Vec<LinkReport>,
}

/// Classifies every link and popup trigger of a page snapshot.
#[derive(Debug, Clone)]
pub struct ScanService {
    classifier: Classifier,
    max_links: usize,
}

impl ScanService {
    /// Creates a scan service inspecting at most `max_links` elements per page.
    pub fn new(classifier: Classifier, max_links: usize) -> Self {
        Self {
            classifier,
            max_links,
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn max_links(&self) -> usize {
        self.max_links
    }

    /// Scans `page`, memoising target descriptions in `cache`.
    ///
    /// Inspected elements are `a`/`area` elements with an `href`, plus
    /// `a`/`area` elements without one and buttons (`button` or
    /// `role="button"`) that pass the popup-trigger heuristic. The cache is
    /// left populated; clear it before reusing it for another page.
    pub fn scan_page(&self, page: &PageSnapshot, cache: &mut ScanCache) -> ScanReport {
        let span = tracing::debug_span!("scan_page", url = %page.url);
        let _guard = span.enter();

        let index = PageIndex::new(page);
        let detector = PopupDetector::new(self.classifier.rules().popup());

        let mut candidates = page
            .iter()
            .filter(|el| {
                is_link(el)
                    || ((is_anchor(el) || is_button(el)) && detector.is_popup_trigger(*el))
            });

        let mut links = Vec::new();
        let mut summary = ScanSummary::default();

        for (position, element) in candidates.by_ref().take(self.max_links).enumerate() {
            let verdict = self.classifier.classify_link(element, &index, cache);

            summary.with_tracking += usize::from(verdict.has_tracking());
            summary.affiliate += usize::from(verdict.is_affiliate());
            summary.popup_triggers += usize::from(verdict.is_popup_trigger());
            summary.anchors += usize::from(verdict.is_anchor());

            links.push(LinkReport {
                index: position,
                tag: element.tag.clone(),
                href: element.href().map(str::to_string),
                text: truncate_chars(&element.text_content(), LINK_TEXT_MAX_CHARS),
                verdict,
            });
        }

        summary.total = links.len();
        summary.truncated = candidates.next().is_some();

        if summary.truncated {
            tracing::warn!(limit = self.max_links, "Scan limit reached, remaining links skipped");
        }

        metrics::counter!("link_inspector_scans_total").increment(1);
        metrics::counter!("link_inspector_links_classified_total").increment(summary.total as u64);

        tracing::debug!(
            total = summary.total,
            with_tracking = summary.with_tracking,
            affiliate = summary.affiliate,
            popup_triggers = summary.popup_triggers,
            anchors = summary.anchors,
            cache_hits = cache.hits(),
            "Page scanned"
        );

        ScanReport {
            page_url: page.url.clone(),
            scanned_at: Utc::now(),
            summary,
            links,
        }
    }
}

fn is_anchor(element: &PageElement) -> bool {
    matches!(element.tag.as_str(), "a" | "area")
}

fn is_link(element: &PageElement) -> bool {
    is_anchor(element) && element.href().is_some()
}

fn is_button(element: &PageElement) -> bool {
    element.tag == "button"
        || element
            .attribute("role")
            .is_some_and(|role| role.trim().eq_ignore_ascii_case("button"))
}

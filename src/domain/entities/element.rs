//! Element model: what the classifier needs to know about a page.
//!
//! The classifier never touches a real DOM. It asks for the handful of
//! properties it inspects through [`LinkLike`] and looks up controlled
//! elements through [`Document`]. [`PageElement`] and [`PageSnapshot`] are a
//! serializable snapshot of a page that implements both; a content script can
//! post one as JSON and tests can build them inline.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::utils::text::collapse_whitespace;

/// Capability interface of an anchor-like element.
pub trait LinkLike {
    /// Lowercase tag name (`a`, `button`, `div`).
    fn tag_name(&self) -> &str;

    /// Value of an attribute, looked up by its lowercase name.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// All attributes in a stable order.
    fn attributes(&self) -> Vec<(&str, &str)>;

    /// Concatenated text of the element and its descendants.
    fn text_content(&self) -> String;

    fn id(&self) -> Option<&str> {
        self.attribute("id").filter(|id| !id.is_empty())
    }

    fn href(&self) -> Option<&str> {
        self.attribute("href")
    }

    fn class_name(&self) -> &str {
        self.attribute("class").unwrap_or("")
    }
}

/// An element that can be the target of a popup trigger or anchor link.
pub trait TargetElement: LinkLike {
    /// Text of the first `h1`..`h6` descendant.
    fn first_heading(&self) -> Option<String>;

    /// Text of the first `p` descendant.
    fn first_paragraph(&self) -> Option<String>;
}

/// Element lookup within the page being inspected.
pub trait Document {
    /// The URL of the page, used as base for relative links.
    fn base_url(&self) -> Option<&Url>;

    /// Returns the first element in document order carrying `id`.
    fn element_by_id(&self, id: &str) -> Option<&dyn TargetElement>;
}

/// One element of a page snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageElement {
    pub tag: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Text directly inside this element (not including children).
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub children: Vec<PageElement>,
}

impl PageElement {
    /// Creates an element with the given tag and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Builder-style attribute setter.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Builder-style text setter.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder-style child appender.
    pub fn child(mut self, child: PageElement) -> Self {
        self.children.push(child);
        self
    }

    /// Iterates over this element and all descendants in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    fn collect_text(&self, out: &mut Vec<String>) {
        if !self.text.trim().is_empty() {
            out.push(self.text.clone());
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    fn first_descendant_text(&self, matches: impl Fn(&str) -> bool) -> Option<String> {
        self.descendants()
            .skip(1)
            .find(|el| matches(el.tag.as_str()))
            .map(|el| el.text_content())
            .filter(|text| !text.is_empty())
    }
}

impl LinkLike for PageElement {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn attributes(&self) -> Vec<(&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        collapse_whitespace(&parts.join(" "))
    }
}

impl TargetElement for PageElement {
    fn first_heading(&self) -> Option<String> {
        self.first_descendant_text(|tag| {
            matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
        })
    }

    fn first_paragraph(&self) -> Option<String> {
        self.first_descendant_text(|tag| tag == "p")
    }
}

/// Pre-order iterator over an element subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a PageElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a PageElement;

    fn next(&mut self) -> Option<Self::Item> {
        let el = self.stack.pop()?;
        self.stack.extend(el.children.iter().rev());
        Some(el)
    }
}

/// A serializable snapshot of a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// The page URL as reported by the browser.
    pub url: String,
    /// Top-level elements (typically the children of `<body>`).
    #[serde(default)]
    pub elements: Vec<PageElement>,
}

impl PageSnapshot {
    pub fn new(url: impl Into<String>, elements: Vec<PageElement>) -> Self {
        Self {
            url: url.into(),
            elements,
        }
    }

    /// Iterates over every element of the page in document order.
    pub fn iter(&self) -> impl Iterator<Item = &PageElement> {
        self.elements.iter().flat_map(PageElement::descendants)
    }
}

/// Id index over a [`PageSnapshot`], implementing [`Document`].
///
/// Built once per scan so that target lookups do not walk the tree.
pub struct PageIndex<'a> {
    base_url: Option<Url>,
    by_id: HashMap<&'a str, &'a PageElement>,
}

impl<'a> PageIndex<'a> {
    pub fn new(page: &'a PageSnapshot) -> Self {
        let mut by_id = HashMap::new();
        for el in page.iter() {
            if let Some(id) = el.id() {
                by_id.entry(id).or_insert(el);
            }
        }

        let base_url = Url::parse(page.url.trim()).ok();
        if base_url.is_none() {
            tracing::debug!(url = %page.url, "Page URL is not absolute, relative links stay unresolved");
        }

        Self { base_url, by_id }
    }

    /// Number of elements carrying an id.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Document for PageIndex<'_> {
    fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    fn element_by_id(&self, id: &str) -> Option<&dyn TargetElement> {
        self.by_id
            .get(id)
            .map(|el| *el as &dyn TargetElement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> PageSnapshot {
        PageSnapshot::new(
            "https://example.com/about",
            vec![
                PageElement::new("nav").child(
                    PageElement::new("a")
                        .attr("href", "#team")
                        .text("Team"),
                ),
                PageElement::new("section")
                    .attr("id", "team")
                    .child(PageElement::new("h2").text("Meet the   team"))
                    .child(PageElement::new("p").text("We build things.")),
                PageElement::new("div").attr("id", "team").text("duplicate"),
            ],
        )
    }

    #[test]
    fn test_attribute_names_are_lowercased() {
        let el = PageElement::new("A").attr("Data-Bs-Toggle", "modal");
        assert_eq!(el.tag_name(), "a");
        assert_eq!(el.attribute("data-bs-toggle"), Some("modal"));
    }

    #[test]
    fn test_text_content_includes_descendants() {
        let el = PageElement::new("div")
            .text("Hello")
            .child(PageElement::new("span").text(" brave\n"))
            .child(PageElement::new("b").text("world"));
        assert_eq!(el.text_content(), "Hello brave world");
    }

    #[test]
    fn test_empty_id_is_none() {
        let el = PageElement::new("div").attr("id", "");
        assert!(el.id().is_none());
    }

    #[test]
    fn test_descendants_document_order() {
        let page = sample_page();
        let tags: Vec<&str> = page.iter().map(|el| el.tag.as_str()).collect();
        assert_eq!(tags, vec!["nav", "a", "section", "h2", "p", "div"]);
    }

    #[test]
    fn test_first_heading_and_paragraph() {
        let page = sample_page();
        let section = &page.elements[1];
        assert_eq!(section.first_heading().as_deref(), Some("Meet the team"));
        assert_eq!(section.first_paragraph().as_deref(), Some("We build things."));
    }

    #[test]
    fn test_first_heading_ignores_self() {
        let heading = PageElement::new("h2").text("Title");
        assert!(heading.first_heading().is_none());
    }

    #[test]
    fn test_index_first_id_wins() {
        let page = sample_page();
        let index = PageIndex::new(&page);
        let found = index.element_by_id("team").unwrap();
        assert_eq!(found.tag_name(), "section");
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_index_missing_id() {
        let page = sample_page();
        let index = PageIndex::new(&page);
        assert!(index.element_by_id("nope").is_none());
    }

    #[test]
    fn test_index_base_url() {
        let page = sample_page();
        let index = PageIndex::new(&page);
        assert_eq!(
            index.base_url().map(Url::as_str),
            Some("https://example.com/about")
        );

        let relative = PageSnapshot::new("about", vec![]);
        assert!(PageIndex::new(&relative).base_url().is_none());
    }

    #[test]
    fn test_snapshot_deserializes_with_defaults() {
        let json = r#"{"url":"https://example.com","elements":[{"tag":"a","attributes":{"href":"/x"}}]}"#;
        let page: PageSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(page.elements[0].href(), Some("/x"));
        assert!(page.elements[0].children.is_empty());
        assert_eq!(page.elements[0].text, "");
    }
}

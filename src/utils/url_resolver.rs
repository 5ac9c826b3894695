//! URL resolution utilities.
//!
//! Links found on a page are frequently relative (`/pricing`, `?page=2`,
//! `#team`). Every classifier works on an absolute [`Url`], so inputs are
//! resolved against the page base before any rule is evaluated.

use url::{ParseError, Url};

/// Errors that can occur while resolving a link target.
///
/// These never reach callers of the classifier: a link that fails to resolve
/// simply produces a verdict without tracking, domain or anchor information.
#[derive(Debug, thiserror::Error)]
pub enum UrlResolveError {
    #[error("Empty URL")]
    Empty,

    #[error("Relative URL without a base: {0}")]
    MissingBase(String),

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),
}

/// Resolves `input` to an absolute URL.
///
/// # Resolution Rules
///
/// 1. **Whitespace**: Leading and trailing whitespace is ignored
/// 2. **Absolute URLs**: Returned as parsed, the base is not consulted
/// 3. **Relative URLs**: Joined onto `base` (fragment-only, query-only and
///    path-relative forms all follow the WHATWG rules implemented by [`Url::join`])
///
/// # Errors
///
/// Returns [`UrlResolveError::Empty`] for blank input.
/// Returns [`UrlResolveError::MissingBase`] for a relative URL when no base is given.
/// Returns [`UrlResolveError::InvalidFormat`] when parsing or joining fails.
///
/// # Examples
///
/// ```ignore
/// let base = Url::parse("https://example.com/blog/").unwrap();
/// assert_eq!(
///     resolve_url("post?id=1", Some(&base)).unwrap().as_str(),
///     "https://example.com/blog/post?id=1"
/// );
/// ```
pub fn resolve_url(input: &str, base: Option<&Url>) -> Result<Url, UrlResolveError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlResolveError::Empty);
    }

    match Url::parse(trimmed) {
        Ok(url) => Ok(url),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let base = base.ok_or_else(|| UrlResolveError::MissingBase(trimmed.to_string()))?;
            base.join(trimmed)
                .map_err(|e| UrlResolveError::InvalidFormat(e.to_string()))
        }
        Err(e) => Err(UrlResolveError::InvalidFormat(e.to_string())),
    }
}

/// Returns the lowercase host of `url` with a leading `www.` removed.
///
/// Returns `None` for URLs without a host (`mailto:`, `data:`, `javascript:`).
pub fn normalized_host(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_ascii_lowercase();
    let host = host.strip_prefix("www.").map(str::to_string).unwrap_or(host);

    if host.is_empty() { None } else { Some(host) }
}

/// Returns true if both URLs point at the same document (fragment ignored).
pub fn same_document(a: &Url, b: &Url) -> bool {
    let mut a = a.clone();
    let mut b = b.clone();
    a.set_fragment(None);
    b.set_fragment(None);
    a == b
}

/// Extracts the in-page fragment a link points at.
///
/// Returns the percent-decoded fragment when `href` is fragment-only
/// (`#team`) or resolves to the same document as `base`. Empty fragments,
/// hashbang routes (`#!/inbox`) and hash-router paths (`#/settings`) are not
/// element references and yield `None`.
pub fn local_fragment(href: &str, base: Option<&Url>) -> Option<String> {
    let href = href.trim();

    let fragment = if let Some(fragment) = href.strip_prefix('#') {
        fragment.to_string()
    } else {
        let base = base?;
        let url = resolve_url(href, Some(base)).ok()?;
        if !same_document(&url, base) {
            return None;
        }
        url.fragment()?.to_string()
    };

    let decoded = match urlencoding::decode(&fragment) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => fragment.clone(),
    };

    if decoded.is_empty() || decoded.starts_with('!') || decoded.starts_with('/') {
        None
    } else {
        Some(decoded)
    }
}

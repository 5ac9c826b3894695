//! Text helpers used to build human-readable labels.

const ELLIPSIS: &str = "...";

/// Upper-cases the first character of every whitespace-separated word.
///
/// The remainder of each word is left untouched, so acronyms survive
/// (`"ftp mirror"` → `"Ftp Mirror"`, `"FAQ list"` → `"FAQ List"`).
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turns an element id into a section title.
///
/// Words are split on `-`, `_`, `.`, whitespace and lower→upper camelCase
/// boundaries, then title-cased.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_element_id("our-team-section"), "Our Team Section");
/// assert_eq!(format_element_id("pricingTable"), "Pricing Table");
/// ```
pub fn format_element_id(id: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in id.chars() {
        if c == '-' || c == '_' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }

        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapses runs of whitespace into single spaces and trims the ends.
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates `input` to at most `max_chars` characters.
///
/// A cut string ends with `...`, counted within `max_chars`. Limits too
/// small to hold the ellipsis cut without one.
pub fn truncate_chars(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }

    if max_chars < ELLIPSIS.len() {
        return input.chars().take(max_chars).collect();
    }

    let kept: String = input.chars().take(max_chars - ELLIPSIS.len()).collect();
    format!("{}{}", kept.trim_end(), ELLIPSIS)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#![allow(dead_code)]

use link_inspector::config::Config;
use link_inspector::state::AppState;
use serde_json::{Value, json};

pub fn test_config() -> Config {
    Config {
        max_urls_per_request: 10,
        max_links_per_scan: 50,
        ..Config::default()
    }
}

pub fn create_test_state() -> AppState {
    create_test_state_with(test_config())
}

pub fn create_test_state_with(config: Config) -> AppState {
    AppState::from_config(&config).unwrap()
}

/// A landing page with an anchor, an affiliate link, a popup trigger and
/// its modal.
pub fn sample_page() -> Value {
    json!({
        "url": "https://example.com/landing",
        "elements": [
            {
                "tag": "nav",
                "children": [
                    { "tag": "a", "attributes": { "href": "#our-team" }, "text": "Team" },
                    { "tag": "a", "attributes": { "href": "/pricing?utm_source=nav" }, "text": "Pricing" }
                ]
            },
            {
                "tag": "a",
                "attributes": { "href": "https://amzn.to/3xYz" },
                "text": "Buy"
            },
            {
                "tag": "button",
                "attributes": { "data-bs-toggle": "modal", "data-bs-target": "#signup" },
                "text": "Subscribe"
            },
            { "tag": "section", "attributes": { "id": "our-team" } },
            {
                "tag": "div",
                "attributes": { "id": "signup", "class": "modal fade" },
                "children": [
                    { "tag": "h2", "text": "Join our newsletter" }
                ]
            }
        ]
    })
}

//! Domain categories.

use crate::domain::entities::DomainCategory;

/// Hosts belonging to a category. A host matches an entry when it equals
/// the entry or ends with `.entry`.
#[derive(Debug, Clone, Copy)]
pub struct DomainCategoryRule {
    pub category: DomainCategory,
    pub hosts: &'static [&'static str],
}

/// Built-in categories, in match order. Mail hosts come first so that
/// `mail.google.com` is not taken for search.
pub const DOMAIN_CATEGORIES: &[DomainCategoryRule] = &[
    DomainCategoryRule {
        category: DomainCategory::Email,
        hosts: &["mail.google.com", "outlook.live.com", "mail.yahoo.com", "proton.me"],
    },
    DomainCategoryRule {
        category: DomainCategory::Search,
        hosts: &[
            "google.com",
            "bing.com",
            "duckduckgo.com",
            "yahoo.com",
            "yandex.ru",
            "baidu.com",
            "ecosia.org",
            "search.brave.com",
        ],
    },
    DomainCategoryRule {
        category: DomainCategory::Video,
        hosts: &["youtube.com", "youtu.be", "vimeo.com", "twitch.tv", "dailymotion.com"],
    },
    DomainCategoryRule {
        category: DomainCategory::Social,
        hosts: &[
            "facebook.com",
            "instagram.com",
            "twitter.com",
            "x.com",
            "t.co",
            "linkedin.com",
            "reddit.com",
            "tiktok.com",
            "pinterest.com",
            "mastodon.social",
            "bsky.app",
            "threads.net",
        ],
    },
    DomainCategoryRule {
        category: DomainCategory::News,
        hosts: &[
            "nytimes.com",
            "bbc.co.uk",
            "bbc.com",
            "theguardian.com",
            "reuters.com",
            "apnews.com",
            "cnn.com",
            "washingtonpost.com",
            "news.ycombinator.com",
        ],
    },
    DomainCategoryRule {
        category: DomainCategory::Shopping,
        hosts: &[
            "amazon.com",
            "amazon.co.uk",
            "amazon.de",
            "amzn.to",
            "ebay.com",
            "etsy.com",
            "aliexpress.com",
            "walmart.com",
            "bestbuy.com",
        ],
    },
    DomainCategoryRule {
        category: DomainCategory::Development,
        hosts: &[
            "github.com",
            "gitlab.com",
            "bitbucket.org",
            "stackoverflow.com",
            "crates.io",
            "docs.rs",
            "npmjs.com",
            "pypi.org",
        ],
    },
    DomainCategoryRule {
        category: DomainCategory::Reference,
        hosts: &["wikipedia.org", "wiktionary.org", "britannica.com", "archive.org"],
    },
];

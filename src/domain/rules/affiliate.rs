//! Affiliate network patterns.

/// An affiliate network and the URL patterns that identify it.
///
/// Patterns are matched case-insensitively against the full URL.
#[derive(Debug, Clone, Copy)]
pub struct AffiliateNetworkRule {
    /// Lowercase network name; title-cased for display.
    pub name: &'static str,
    pub patterns: &'static [&'static str],
}

/// Built-in networks, in evaluation order.
pub const AFFILIATE_NETWORKS: &[AffiliateNetworkRule] = &[
    AffiliateNetworkRule {
        name: "amazon",
        patterns: &[
            r"\bamzn\.to\b",
            r"\bamzn\.(com|eu|asia)/",
            r"\bamazon\.[a-z.]{2,6}/.*[?&]tag=",
        ],
    },
    AffiliateNetworkRule {
        name: "shareasale",
        patterns: &[r"\bshareasale\.com/r\.cfm", r"\bshareasale-analytics\.com\b"],
    },
    AffiliateNetworkRule {
        name: "commission junction",
        patterns: &[
            r"\b(anrdoezrs|dpbolvw)\.net\b",
            r"\b(jdoqocy|kqzyfj|tkqlhce|emjcd)\.com\b",
        ],
    },
    AffiliateNetworkRule {
        name: "rakuten",
        patterns: &[r"\bclick\.linksynergy\.com\b", r"\blinksynergy\.com/"],
    },
    AffiliateNetworkRule {
        name: "awin",
        patterns: &[r"\bawin1\.com\b", r"[?&]awinmid="],
    },
    AffiliateNetworkRule {
        name: "impact",
        patterns: &[
            r"\.sjv\.io/",
            r"\.pxf\.io/",
            r"\.ojrq\.net/",
            r"\bimpactradius\.com\b",
        ],
    },
    AffiliateNetworkRule {
        name: "clickbank",
        patterns: &[r"\bhop\.clickbank\.net\b", r"\.hop\.clickbank\.net\b"],
    },
    AffiliateNetworkRule {
        name: "ebay partner network",
        patterns: &[r"\brover\.ebay\.[a-z.]+/", r"\bebay\.[a-z.]+/.*[?&]campid=\d+"],
    },
    AffiliateNetworkRule {
        name: "skimlinks",
        patterns: &[r"\bgo\.skimresources\.com\b", r"\bredirectingat\.com\b"],
    },
    AffiliateNetworkRule {
        name: "partnerstack",
        patterns: &[r"[?&]ps_partner_key=", r"\bgrsm\.io/"],
    },
    AffiliateNetworkRule {
        name: "flexoffers",
        patterns: &[r"\btrack\.flexlinkspro\.com\b", r"\bflexlinks\.com\b"],
    },
];

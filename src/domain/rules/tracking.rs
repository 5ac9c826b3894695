//! Tracking parameter dictionary.

use serde::Serialize;

use crate::domain::entities::TrackingCategory;

/// A known tracking query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackingParameterDefinition {
    /// Canonical lowercase parameter name.
    pub key: &'static str,
    pub display_name: &'static str,
    pub meaning: &'static str,
    pub category: TrackingCategory,
}

const fn def(
    key: &'static str,
    display_name: &'static str,
    meaning: &'static str,
    category: TrackingCategory,
) -> TrackingParameterDefinition {
    TrackingParameterDefinition {
        key,
        display_name,
        meaning,
        category,
    }
}

use TrackingCategory::{Ads, Email, Tracking, Utm};

/// Built-in tracking parameters. Keys are unique and lowercase.
pub const TRACKING_PARAMETERS: &[TrackingParameterDefinition] = &[
    // Campaign parameters
    def("utm_source", "UTM Source", "Where the traffic comes from (site, newsletter, platform)", Utm),
    def("utm_medium", "UTM Medium", "Marketing channel (email, cpc, social, banner)", Utm),
    def("utm_campaign", "UTM Campaign", "Name of the marketing campaign", Utm),
    def("utm_term", "UTM Term", "Paid search keyword", Utm),
    def("utm_content", "UTM Content", "Which ad or link variant was clicked", Utm),
    def("utm_id", "UTM ID", "Campaign identifier used by analytics imports", Utm),
    def("utm_source_platform", "UTM Source Platform", "Platform that bought the traffic", Utm),
    def("utm_creative_format", "UTM Creative Format", "Format of the creative (video, display)", Utm),
    def("utm_marketing_tactic", "UTM Marketing Tactic", "Targeting tactic (remarketing, prospecting)", Utm),
    // Ad-platform click identifiers
    def("gclid", "Google Click ID", "Links the visit to a Google Ads click", Ads),
    def("gclsrc", "Google Click Source", "Source of the Google Ads click identifier", Ads),
    def("dclid", "DoubleClick ID", "Links the visit to a Display & Video 360 impression", Ads),
    def("gbraid", "Google App Click ID", "Google Ads click identifier for iOS app campaigns", Ads),
    def("wbraid", "Google Web Click ID", "Google Ads click identifier for web-to-app measurement", Ads),
    def("fbclid", "Facebook Click ID", "Links the visit to a click on Facebook or Instagram", Ads),
    def("msclkid", "Microsoft Click ID", "Links the visit to a Microsoft Advertising click", Ads),
    def("ttclid", "TikTok Click ID", "Links the visit to a TikTok ad click", Ads),
    def("twclid", "X Click ID", "Links the visit to an X (Twitter) ad click", Ads),
    def("li_fat_id", "LinkedIn Click ID", "Links the visit to a LinkedIn ad click", Ads),
    def("yclid", "Yandex Click ID", "Links the visit to a Yandex Direct click", Ads),
    def("epik", "Pinterest Click ID", "Links the visit to a Pinterest ad click", Ads),
    def("sccid", "Snapchat Click ID", "Links the visit to a Snapchat ad click", Ads),
    // Analytics and referral identifiers
    def("_ga", "Google Analytics Client ID", "Carries the analytics client id across domains", Tracking),
    def("_gl", "Google Linker", "Cross-domain measurement payload for Google tags", Tracking),
    def("igshid", "Instagram Share ID", "Identifies who shared the link on Instagram", Tracking),
    def("si", "Share ID", "Identifies the sharing session (YouTube, Spotify)", Tracking),
    def("ref", "Referrer", "Names the referring site or partner", Tracking),
    def("ref_src", "Referrer Source", "Names the referring surface (used by X)", Tracking),
    def("srsltid", "Google Merchant Result ID", "Links the visit to a Google Shopping result", Tracking),
    def("spm", "Super Position Model", "Alibaba page-position tracking code", Tracking),
    def("hsa_acc", "HubSpot Ads Account", "HubSpot ads account identifier", Tracking),
    // Email marketing
    def("mc_cid", "Mailchimp Campaign ID", "Identifies the Mailchimp campaign", Email),
    def("mc_eid", "Mailchimp Subscriber ID", "Identifies the Mailchimp subscriber", Email),
    def("_hsenc", "HubSpot Email Token", "Identifies the HubSpot email recipient", Email),
    def("_hsmi", "HubSpot Message ID", "Identifies the HubSpot email message", Email),
    def("mkt_tok", "Marketo Token", "Identifies the Marketo email recipient", Email),
    def("vero_id", "Vero ID", "Identifies the Vero email recipient", Email),
    def("oly_enc_id", "Omeda Encrypted ID", "Identifies the Omeda email recipient", Email),
    def("oly_anon_id", "Omeda Anonymous ID", "Anonymous Omeda visitor identifier", Email),
    def("__s", "Drip Subscriber ID", "Identifies the Drip email subscriber", Email),
    def("ck_subscriber_id", "Kit Subscriber ID", "Identifies the Kit (ConvertKit) subscriber", Email),
];

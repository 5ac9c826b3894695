//! Popup-trigger heuristics.

/// Keywords that name a popup-style widget. Matched against hrefs and
/// `aria-controls` values.
pub const POPUP_KEYWORD_PATTERN: &str =
    r"(popup|pop-up|modal|lightbox|dialog|overlay|drawer|offcanvas|off-canvas|fancybox|popover)";

/// Class names of popup triggers. A keyword must stand as its own
/// dash/underscore-delimited segment (`open-modal`, `js_lightbox`).
pub const POPUP_CLASS_PATTERN: &str = r"(^|[\s_-])(popup|pop-up|modal|lightbox|dialog|drawer|offcanvas|fancybox|popover)([\s_-]|$)";

/// Attributes whose mere presence marks a popup trigger.
pub const POPUP_ATTRIBUTES: &[&str] = &[
    "data-popup",
    "data-modal",
    "data-lightbox",
    "data-fancybox",
    "data-featherlight",
    "data-micromodal-trigger",
    "data-remodal-target",
    "data-open-modal",
];

/// Framework toggle attributes; they mark a trigger only when their value
/// names a popup widget (`data-bs-toggle="modal"`, not `"collapse"`).
pub const TOGGLE_ATTRIBUTES: &[&str] = &["data-toggle", "data-bs-toggle"];

/// Attributes holding a selector of the controlled element.
pub const TARGET_ATTRIBUTES: &[&str] = &["data-target", "data-bs-target"];

/// Attributes holding the id of the controlled element.
pub const ID_ATTRIBUTES: &[&str] = &["data-popup", "data-modal"];

/// Widget kinds, in match order. Default: `popup`.
pub const TYPE_KEYWORDS: &[(&str, &[&str])] = &[
    ("modal", &["modal"]),
    ("lightbox", &["lightbox", "fancybox", "featherlight", "gallery"]),
    ("drawer", &["drawer", "offcanvas", "off-canvas", "sidebar", "slide-in"]),
    ("dialog", &["dialog"]),
    ("tooltip", &["tooltip", "popover"]),
    ("overlay", &["overlay"]),
];

pub const DEFAULT_POPUP_TYPE: &str = "popup";

/// Popup purposes, in match order. Default: `general`.
pub const PURPOSE_KEYWORDS: &[(&str, &[&str])] = &[
    ("newsletter", &["newsletter", "subscribe", "signup", "sign-up", "mailing list"]),
    ("login", &["login", "log-in", "log in", "signin", "sign-in", "sign in", "register", "account"]),
    ("cookie", &["cookie", "consent", "gdpr"]),
    ("video", &["video", "youtube", "vimeo", "player"]),
    ("image", &["image", "photo", "gallery", "picture"]),
    ("contact", &["contact", "enquiry", "inquiry", "get a quote"]),
    ("cart", &["cart", "checkout", "basket"]),
    ("search", &["search"]),
    ("share", &["share"]),
    ("promotion", &["promo", "offer", "discount", "coupon"]),
];

pub const DEFAULT_POPUP_PURPOSE: &str = "general";

/// Used when no description can be derived from the popup element.
pub const DEFAULT_POPUP_DESCRIPTION: &str = "Popup content";

/// Maximum length of a description taken from paragraph text.
pub const DESCRIPTION_MAX_CHARS: usize = 100;

//! Domain entities: the element model and classification results.

pub mod element;
pub mod verdict;

pub use element::{Document, LinkLike, PageElement, PageIndex, PageSnapshot, TargetElement};
pub use verdict::{
    AnchorInfo, DomainCategory, LinkVerdict, PopupInfo, TrackingCategory, TrackingMatch,
};

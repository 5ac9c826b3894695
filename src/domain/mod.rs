//! Domain layer: the element model, classification results and rule tables.
//!
//! Nothing here performs classification. The domain layer only describes
//! what a link looks like ([`entities::LinkLike`]), what a verdict contains
//! ([`entities::LinkVerdict`]) and which rules exist ([`rules::RuleSet`]).
//! The evaluation itself lives in [`crate::application::services`].
//!
//! # Architecture
//!
//! - [`entities`] - Element capability traits, page snapshots and verdicts
//! - [`rules`] - Static rule tables and their compiled form

pub mod entities;
pub mod rules;

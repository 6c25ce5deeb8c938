//! Core data model definitions shared across Cartelera crates.

pub mod catalog;
pub mod discover;
pub mod intent;
pub mod video;

// Intentionally curated re-exports for downstream consumers.
pub use catalog::{DiscoverPage, MovieItem};
pub use discover::{DiscoverParams, ParamValue};
pub use intent::{Energy, Intent, Language, Mood, Recency};
pub use video::{TrailerPick, VideoCandidate};

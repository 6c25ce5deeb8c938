//! Intent extraction: free text in, structured [`Intent`] out.
//!
//! Two interchangeable strategies live behind [`IntentExtractor`], chosen
//! once at construction time. Extraction is infallible by contract: every
//! input, including the empty string, yields an `Intent`, possibly with
//! every field at its empty default.

mod keyword;
mod model;

pub use keyword::KeywordExtractor;
pub use model::ModelExtractor;

use async_trait::async_trait;
use cartelera_model::Intent;

#[async_trait]
pub trait IntentExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Intent;
}

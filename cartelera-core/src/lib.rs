//! Decision logic for the Cartelera recommendation service.
//!
//! Everything with an opinion lives here: the genre lexicon, the two intent
//! extraction strategies, the intent-to-discover-query synthesizer, the
//! trailer preference cascade, and response assembly. HTTP routing and
//! configuration stay in their own crates; the provider clients under
//! [`providers`] are the only code here that touches the network.

pub mod intent;
pub mod lexicon;
pub mod providers;
pub mod query;
pub mod summary;
pub mod trailer;

pub use intent::{IntentExtractor, KeywordExtractor, ModelExtractor};
pub use providers::{CompletionClient, ProviderError, TmdbClient};
pub use query::discover_params;
pub use summary::{assistant_line, clamp_page, summarize};
pub use trailer::{find_trailer, merge_candidates, pick_best};

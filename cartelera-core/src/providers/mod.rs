//! HTTP clients for the external collaborators: the TMDB catalog and the
//! text-completion service used for intent extraction.

mod completion;
mod tmdb;

pub use completion::{CompletionClient, DEFAULT_COMPLETION_BASE};
pub use tmdb::TmdbClient;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

//! Shared configuration for the Cartelera service.
//!
//! One explicit [`Config`] record is built at process start and handed to
//! each component; nothing reads the environment ad hoc afterwards. The
//! loader takes an injectable lookup so tests never touch process env.

pub mod models;

pub use models::{Config, IntentConfig, ServerConfig, TmdbConfig};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The catalog credential is the one thing the service cannot start
    /// without.
    #[error("TMDB_API_KEY is not set; create a .env file with TMDB_API_KEY")]
    MissingTmdbKey,

    #[error("invalid SERVER_PORT value {0:?}")]
    InvalidPort(String),
}

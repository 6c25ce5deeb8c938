use crate::ConfigError;
use tracing::info;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LOCALE: &str = "es-ES";
pub const DEFAULT_REGION: &str = "CO";
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub tmdb: TmdbConfig,
    pub intent: IntentConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub base_url: String,
    pub api_key: String,
    /// Default request language, e.g. `es-ES`.
    pub language: String,
    /// Default release region, e.g. `CO`.
    pub region: String,
}

#[derive(Debug, Clone)]
pub struct IntentConfig {
    pub openai_api_key: Option<String>,
    pub model: String,
    /// When set, the deterministic extractor runs unconditionally even if
    /// a model credential is present.
    pub force_fallback: bool,
}

impl IntentConfig {
    /// Whether the model-assisted extraction path should be constructed.
    pub fn model_enabled(&self) -> bool {
        !self.force_fallback
            && self
                .openai_api_key
                .as_deref()
                .is_some_and(|key| !key.is_empty())
    }
}

impl Config {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary lookup function. Missing keys fall back to
    /// defaults; only the TMDB credential is mandatory.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
        };

        let api_key = get("TMDB_API_KEY").ok_or(ConfigError::MissingTmdbKey)?;

        let port = match get("SERVER_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let intent = IntentConfig {
            openai_api_key: get("OPENAI_API_KEY"),
            model: get("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_owned()),
            force_fallback: get("MOCK_INTENT").as_deref() == Some("1"),
        };

        if !intent.model_enabled() {
            info!("intent extraction will use the deterministic classifier");
        }

        Ok(Self {
            server: ServerConfig {
                host: get("SERVER_HOST")
                    .unwrap_or_else(|| DEFAULT_HOST.to_owned()),
                port,
            },
            tmdb: TmdbConfig {
                base_url: get("TMDB_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_owned())
                    .trim_end_matches('/')
                    .to_owned(),
                api_key,
                language: get("APP_LOCALE")
                    .unwrap_or_else(|| DEFAULT_LOCALE.to_owned()),
                region: get("APP_REGION")
                    .unwrap_or_else(|| DEFAULT_REGION.to_owned()),
            },
            intent,
        })
    }
}

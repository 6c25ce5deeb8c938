use cartelera_config::Config;
use cartelera_core::intent::{
    IntentExtractor, KeywordExtractor, ModelExtractor,
};
use cartelera_core::providers::{
    CompletionClient, DEFAULT_COMPLETION_BASE, TmdbClient,
};
use std::sync::Arc;
use tracing::info;

/// Shared per-request context. Everything inside is immutable after
/// startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tmdb: Arc<TmdbClient>,
    pub extractor: Arc<dyn IntentExtractor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let tmdb = TmdbClient::new(
            &config.tmdb.base_url,
            &config.tmdb.api_key,
            &config.tmdb.language,
            &config.tmdb.region,
        );

        // Strategy choice happens exactly once, here. The model extractor
        // still owns a keyword classifier for its silent fallback path.
        let extractor: Arc<dyn IntentExtractor> =
            if config.intent.model_enabled() {
                info!(model = %config.intent.model, "using model-assisted intent extraction");
                let key = config
                    .intent
                    .openai_api_key
                    .as_deref()
                    .unwrap_or_default();
                Arc::new(ModelExtractor::new(CompletionClient::new(
                    DEFAULT_COMPLETION_BASE,
                    key,
                    &config.intent.model,
                )))
            } else {
                info!("using deterministic keyword intent extraction");
                Arc::new(KeywordExtractor::new())
            };

        Self {
            config: Arc::new(config),
            tmdb: Arc::new(tmdb),
            extractor,
        }
    }
}

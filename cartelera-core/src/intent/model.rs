//! Model-assisted intent extraction with a silent deterministic fallback.

use super::{IntentExtractor, KeywordExtractor};
use crate::providers::CompletionClient;
use async_trait::async_trait;
use cartelera_model::Intent;
use tracing::warn;

/// Instruction sent with every extraction request. The lenient `Intent`
/// serde absorbs whatever the model gets wrong field-by-field; only a
/// reply that is not JSON at all forces the fallback.
const SYSTEM_PROMPT: &str = "\
Eres un extractor estricto para un recomendador de películas.
Devuelve SOLO un JSON con estas claves:
{
  \"mood\": \"\",             // \"\", \"ligero\",\"intenso\",\"romantico\",\"suspenso\",\"terror\",\"aventura\"
  \"energy\": \"\",           // \"\", \"baja\",\"media\",\"alta\"
  \"recency\": \"\",          // \"\", \"reciente\",\"clasico\"
  \"language\": \"\",         // \"\", \"es\",\"en\"
  \"include_genres\": [],   // array de strings
  \"exclude_genres\": []    // array de strings
}
Sin comentarios ni texto extra.";

/// Sends the text to the completion service and parses its JSON reply.
/// Any failure along the way degrades to the keyword classifier; the
/// caller always gets an `Intent`, never an error.
#[derive(Debug)]
pub struct ModelExtractor {
    client: CompletionClient,
    fallback: KeywordExtractor,
}

impl ModelExtractor {
    pub fn new(client: CompletionClient) -> Self {
        Self {
            client,
            fallback: KeywordExtractor::new(),
        }
    }
}

#[async_trait]
impl IntentExtractor for ModelExtractor {
    async fn extract(&self, text: &str) -> Intent {
        let raw = match self.client.complete(SYSTEM_PROMPT, text).await {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "intent completion failed, using keyword fallback");
                return self.fallback.classify(text);
            }
        };

        match serde_json::from_str::<Intent>(&raw) {
            Ok(intent) => intent,
            Err(error) => {
                warn!(%error, "model reply was not JSON, using keyword fallback");
                self.fallback.classify(text)
            }
        }
    }
}

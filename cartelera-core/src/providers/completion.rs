//! Chat-completion client for model-assisted intent extraction.

use super::ProviderError;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

pub const DEFAULT_COMPLETION_BASE: &str = "https://api.openai.com/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Extraction should stay as close to deterministic as the model allows.
const TEMPERATURE: f64 = 0.1;

pub struct CompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl CompletionClient {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to construct HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
            model: model.to_owned(),
        }
    }

    /// One chat completion demanding a JSON object reply. Returns the raw
    /// message content; interpreting it is the caller's problem.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, ProviderError> {
        let body = json!({
            "model": self.model,
            "temperature": TEMPERATURE,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_text },
            ],
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            #[derive(Debug, Deserialize)]
            struct ErrorBody {
                #[serde(default)]
                error: Option<ErrorDetail>,
            }
            #[derive(Debug, Deserialize)]
            struct ErrorDetail {
                #[serde(default)]
                message: Option<String>,
            }

            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|detail| detail.message)
                .unwrap_or_else(|| {
                    format!("completion request failed with status {status}")
                });

            return match status.as_u16() {
                401 => Err(ProviderError::InvalidApiKey),
                429 => Err(ProviderError::RateLimited),
                _ => Err(ProviderError::ApiError(message)),
            };
        }

        #[derive(Debug, Deserialize)]
        struct ChatCompletion {
            #[serde(default)]
            choices: Vec<Choice>,
        }
        #[derive(Debug, Deserialize)]
        struct Choice {
            message: ChoiceMessage,
        }
        #[derive(Debug, Deserialize)]
        struct ChoiceMessage {
            #[serde(default)]
            content: Option<String>,
        }

        let completion = response.json::<ChatCompletion>().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ProviderError::ParseError(
                    "completion reply carried no content".to_owned(),
                )
            })
    }
}

//! Thin reqwest client for the TMDB v3 API.

use super::ProviderError;
use cartelera_model::{DiscoverPage, DiscoverParams, MovieItem, VideoCandidate};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
    region: String,
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("region", &self.region)
            .finish()
    }
}

impl TmdbClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        language: &str,
        region: &str,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to construct HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
            language: language.to_owned(),
            region: region.to_owned(),
        }
    }

    async fn get_json<T>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(ProviderError::from);
        }

        #[derive(Debug, Deserialize)]
        struct TmdbErrorBody {
            #[serde(default)]
            status_message: Option<String>,
        }

        let message = response
            .json::<TmdbErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status_message)
            .unwrap_or_else(|| {
                format!("TMDB request failed with status {status}")
            });

        match status.as_u16() {
            401 => Err(ProviderError::InvalidApiKey),
            404 => Err(ProviderError::NotFound),
            429 => Err(ProviderError::RateLimited),
            _ => Err(ProviderError::ApiError(message)),
        }
    }

    /// Credential plus locale defaults, prepended to catalog queries the
    /// way the front-end's shared fetch wrapper did. Empty values are
    /// skipped rather than sent as empty parameters.
    fn base_query(&self) -> Vec<(String, String)> {
        [
            ("api_key", self.api_key.as_str()),
            ("language", self.language.as_str()),
            ("region", self.region.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
    }

    /// Run a filtered discovery query. Failures here surface to the
    /// caller; a broken catalog is a request-level error.
    pub async fn discover_movies(
        &self,
        params: &DiscoverParams,
        page: u32,
    ) -> Result<DiscoverPage<MovieItem>, ProviderError> {
        let mut query = self.base_query();
        query.extend(params.to_query());
        query.push(("page".to_owned(), page.max(1).to_string()));

        self.get_json("/discover/movie", &query).await
    }

    /// Fetch the video list for one movie under one locale, or no locale
    /// at all. Locale defaults are deliberately not attached here; the
    /// trailer selector controls the exact variants it queries.
    pub async fn movie_videos(
        &self,
        movie_id: u64,
        locale: Option<&str>,
    ) -> Result<Vec<VideoCandidate>, ProviderError> {
        #[derive(Debug, Deserialize)]
        struct VideoList {
            #[serde(default)]
            results: Vec<VideoCandidate>,
        }

        let mut query =
            vec![("api_key".to_owned(), self.api_key.clone())];
        if let Some(locale) = locale {
            query.push(("language".to_owned(), locale.to_owned()));
        }

        let list: VideoList = self
            .get_json(&format!("/movie/{movie_id}/videos"), &query)
            .await?;
        Ok(list.results)
    }

    /// Today's trending movies, passed through untyped. Used as the
    /// liveness probe.
    pub async fn trending_today(&self) -> Result<Value, ProviderError> {
        self.get_json("/trending/movie/day", &self.base_query())
            .await
    }
}

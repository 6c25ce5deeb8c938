//! Catalog discovery result types.

use serde::{Deserialize, Serialize};

/// One page of results from a paginated TMDB endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverPage<T> {
    pub page: u32,
    pub results: Vec<T>,
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// One movie row from `/discover/movie`. Only the fields the summary line
/// reads are typed; everything else passes through untouched so the client
/// sees the catalog's full payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieItem {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_air_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

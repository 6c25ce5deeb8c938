use crate::{AppState, errors::AppResult};
use axum::{Json, extract::State};
use cartelera_core::{clamp_page, discover_params};
use cartelera_model::{DiscoverParams, Energy, Intent, Mood, MovieItem};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured shortcut used by the answer-button UI: mood and energy come
/// in pre-classified, so extraction is skipped entirely.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecommendRequest {
    pub mood: Mood,
    pub energy: Energy,
    pub page: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub params: DiscoverParams,
    pub page: u32,
    pub total_pages: u32,
    pub results: Vec<MovieItem>,
}

pub async fn recommend_handler(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<RecommendResponse>> {
    let intent = Intent {
        mood: request.mood,
        energy: request.energy,
        ..Intent::default()
    };
    let params = discover_params(&intent, Utc::now().date_naive());
    let page = clamp_page(request.page.as_ref());

    let data = state.tmdb.discover_movies(&params, page).await?;

    Ok(Json(RecommendResponse {
        params,
        page: data.page,
        total_pages: data.total_pages,
        results: data.results,
    }))
}

use crate::{AppState, errors::AppResult};
use axum::{Json, extract::State};
use serde_json::Value;

/// Liveness probe that exercises the catalog credential by proxying
/// today's trending movies.
pub async fn ping_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Value>> {
    let trending = state.tmdb.trending_today().await?;
    Ok(Json(trending))
}

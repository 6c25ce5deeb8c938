use crate::{AppState, errors::AppError, errors::AppResult};
use axum::{Json, extract::State};
use cartelera_core::{assistant_line, clamp_page, discover_params, summarize};
use cartelera_model::{DiscoverParams, Intent, MovieItem};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    /// Left untyped on purpose; clamping handles whatever the client sent.
    #[serde(default)]
    pub page: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub ok: bool,
    pub answers: Intent,
    pub params: DiscoverParams,
    pub page: u32,
    pub total_pages: u32,
    pub results: Vec<MovieItem>,
    pub assistant: String,
}

/// Free-text entry point: extract intent, synthesize the discovery query,
/// fetch one page, and compose the assistant's reply.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let message = request
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("missing message"))?;

    let answers = state.extractor.extract(&message).await;
    let params = discover_params(&answers, Utc::now().date_naive());
    let page = clamp_page(request.page.as_ref());

    let data = state.tmdb.discover_movies(&params, page).await?;
    let assistant = assistant_line(&summarize(&data.results));

    Ok(Json(ChatResponse {
        ok: true,
        answers,
        params,
        page: data.page,
        total_pages: data.total_pages,
        results: data.results,
        assistant,
    }))
}

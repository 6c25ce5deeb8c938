use crate::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use cartelera_core::find_trailer;
use cartelera_model::TrailerPick;

/// Best localized trailer for one movie. Infallible by design: per-locale
/// fetch failures contribute nothing, and "no usable trailer" is the
/// null/null body, not an error status.
pub async fn trailer_handler(
    State(state): State<AppState>,
    Path(movie_id): Path<u64>,
) -> Json<TrailerPick> {
    Json(find_trailer(&state.tmdb, movie_id).await)
}

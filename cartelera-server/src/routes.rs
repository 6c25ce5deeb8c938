use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the full application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(handlers::chat::chat_handler))
        .route("/api/recommend", post(handlers::recommend::recommend_handler))
        .route("/api/trailer/{id}", get(handlers::trailer::trailer_handler))
        .route("/api/ping", get(handlers::ping::ping_handler))
        .layer(TraceLayer::new_for_http())
        // Browser front-end lives on another origin in dev.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

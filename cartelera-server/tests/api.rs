//! End-to-end tests over the real router, with a stub TMDB service
//! listening on a loopback port.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_test::TestServer;
use cartelera_config::Config;
use cartelera_server::{AppState, routes::create_router};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type CapturedQuery = Arc<Mutex<HashMap<String, String>>>;

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{addr}")
}

fn test_config(tmdb_base: &str) -> Config {
    let base = tmdb_base.to_owned();
    Config::from_lookup(move |key| match key {
        "TMDB_API_KEY" => Some("test-key".to_owned()),
        "TMDB_BASE_URL" => Some(base.clone()),
        _ => None,
    })
    .expect("test config")
}

async fn discover_stub(
    State(captured): State<CapturedQuery>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    *captured.lock().unwrap() = query;
    Json(json!({
        "page": 1,
        "total_pages": 42,
        "total_results": 840,
        "results": [
            { "id": 1, "title": "Amores Perros", "release_date": "2000-06-16" },
            { "id": 2, "title": "Roma", "release_date": "2018-11-21" },
        ],
    }))
}

async fn chat_setup() -> (TestServer, CapturedQuery) {
    let captured: CapturedQuery = Arc::default();
    let stub = Router::new()
        .route("/discover/movie", get(discover_stub))
        .with_state(captured.clone());
    let base = spawn(stub).await;

    let state = AppState::new(test_config(&base));
    let server = TestServer::new(create_router(state)).expect("test server");
    (server, captured)
}

#[tokio::test]
async fn chat_round_trip_with_the_fallback_extractor() {
    let (server, captured) = chat_setup().await;

    let response = server
        .post("/api/chat")
        .json(&json!({
            "message": "algo romántico y tranquilo en español",
            "page": 0,
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["ok"], true);
    assert_eq!(body["answers"]["mood"], "romantico");
    assert_eq!(body["answers"]["energy"], "baja");
    assert_eq!(body["params"]["with_genres"], "10749");
    assert_eq!(body["params"]["sort_by"], "popularity.desc");
    assert_eq!(body["params"]["with_original_language"], "es");
    assert_eq!(body["page"], 1);
    assert_eq!(body["total_pages"], 42);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
    let assistant = body["assistant"].as_str().unwrap();
    assert!(assistant.contains("Amores Perros (2000)"));
    assert!(assistant.contains("Roma (2018)"));

    let query = captured.lock().unwrap().clone();
    assert_eq!(query.get("api_key").map(String::as_str), Some("test-key"));
    assert_eq!(query.get("language").map(String::as_str), Some("es-ES"));
    assert_eq!(query.get("region").map(String::as_str), Some("CO"));
    assert_eq!(query.get("page").map(String::as_str), Some("1"));
    assert_eq!(
        query.get("with_original_language").map(String::as_str),
        Some("es")
    );
}

#[tokio::test]
async fn chat_without_a_message_is_a_client_error() {
    let (server, _captured) = chat_setup().await;

    let response = server.post("/api/chat").json(&json!({ "page": 3 })).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "missing message");
}

#[tokio::test]
async fn recommend_builds_params_and_clamps_the_page() {
    let (server, captured) = chat_setup().await;

    let response = server
        .post("/api/recommend")
        .json(&json!({ "mood": "terror", "energy": "alta", "page": 10000 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["params"]["with_genres"], "27");
    assert_eq!(body["params"]["sort_by"], "vote_average.desc");
    assert_eq!(body["params"]["vote_average.gte"], 7.3);

    let query = captured.lock().unwrap().clone();
    assert_eq!(query.get("page").map(String::as_str), Some("500"));
    assert_eq!(query.get("sort_by").map(String::as_str), Some("vote_average.desc"));
}

#[tokio::test]
async fn discovery_failure_surfaces_as_an_upstream_error() {
    let stub = Router::new().route(
        "/discover/movie",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status_message": "Internal error" })),
            )
                .into_response()
        }),
    );
    let base = spawn(stub).await;

    let state = AppState::new(test_config(&base));
    let server = TestServer::new(create_router(state)).expect("test server");

    let response = server
        .post("/api/chat")
        .json(&json!({ "message": "algo de drama" }))
        .await;
    response.assert_status(StatusCode::BAD_GATEWAY);

    let body: Value = response.json();
    assert_eq!(body["ok"], false);
    assert!(body["error"].as_str().unwrap().contains("Internal error"));
}

#[tokio::test]
async fn trailer_route_returns_the_preferred_pick() {
    async fn videos(
        Path(_id): Path<u64>,
        Query(query): Query<HashMap<String, String>>,
    ) -> Json<Value> {
        let results = match query.get("language").map(String::as_str) {
            Some("es-MX") => json!([{
                "site": "YouTube", "type": "Trailer", "key": "mx-key",
                "iso_639_1": "es", "iso_3166_1": "MX",
            }]),
            _ => json!([{
                "site": "YouTube", "type": "Teaser", "key": "other-key",
                "iso_639_1": "en",
            }]),
        };
        Json(json!({ "results": results }))
    }

    let stub = Router::new().route("/movie/{id}/videos", get(videos));
    let base = spawn(stub).await;

    let state = AppState::new(test_config(&base));
    let server = TestServer::new(create_router(state)).expect("test server");

    let response = server.get("/api/trailer/603").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["site"], "YouTube");
    assert_eq!(body["key"], "mx-key");
}

#[tokio::test]
async fn trailer_route_tolerates_a_dead_catalog() {
    let stub = Router::new().route(
        "/movie/{id}/videos",
        get(|| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
        }),
    );
    let base = spawn(stub).await;

    let state = AppState::new(test_config(&base));
    let server = TestServer::new(create_router(state)).expect("test server");

    let response = server.get("/api/trailer/603").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["site"], Value::Null);
    assert_eq!(body["key"], Value::Null);
}

#[tokio::test]
async fn ping_proxies_the_trending_feed() {
    let stub = Router::new().route(
        "/trending/movie/day",
        get(|| async {
            Json(json!({ "page": 1, "results": [{ "id": 7, "title": "Dune" }] }))
        }),
    );
    let base = spawn(stub).await;

    let state = AppState::new(test_config(&base));
    let server = TestServer::new(create_router(state)).expect("test server");

    let response = server.get("/api/ping").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["results"][0]["title"], "Dune");
}

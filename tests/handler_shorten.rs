mod common;

use axum::http::StatusCode;
use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;
use url_shortener::api::handlers::shorten_handler;
use url_shortener::routes::app_router;

fn shorten_app(state: url_shortener::AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_shorten_success(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .add_header("Host", "localhost:5000")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let short_url = body["short_url"].as_str().unwrap();
    assert!(short_url.starts_with("http://localhost:5000/"));

    let code = short_url.rsplit('/').next().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[sqlx::test]
async fn test_shorten_persists_mapping(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(shorten_app(state)).unwrap();

    server
        .post("/shorten")
        .add_header("Host", "localhost:5000")
        .json(&json!({ "url": "https://example.com/page" }))
        .await
        .assert_status(StatusCode::CREATED);

    assert_eq!(common::count_mappings(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_same_url_twice_yields_distinct_codes(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(shorten_app(state)).unwrap();

    let first = server
        .post("/shorten")
        .add_header("Host", "localhost:5000")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/shorten")
        .add_header("Host", "localhost:5000")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["short_url"], second["short_url"]);
    assert_eq!(common::count_mappings(&pool).await, 2);
}

#[sqlx::test]
async fn test_shorten_uses_request_host(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .add_header("Host", "sho.rt")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    let body = response.json::<serde_json::Value>();
    assert!(body["short_url"].as_str().unwrap().starts_with("http://sho.rt/"));
}

#[sqlx::test]
async fn test_shorten_missing_url_field(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .add_header("Host", "localhost:5000")
        .json(&json!({ "link": "https://example.com" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "Missing \"url\" field");
    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_non_json_body(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .add_header("Host", "localhost:5000")
        .text("not json")
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Request body must be JSON");
    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_malformed_json_body(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .add_header("Host", "localhost:5000")
        .add_header("Content-Type", "application/json")
        .bytes("{ \"url\": ".into())
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Request body is not valid JSON");
    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_missing_host_header(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_then_redirect_round_trip(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(app_router(state)).unwrap();

    let body = server
        .post("/shorten")
        .add_header("Host", "localhost:5000")
        .json(&json!({ "url": "https://example.com/target?q=1" }))
        .await
        .json::<serde_json::Value>();

    let short_url = body["short_url"].as_str().unwrap();
    let code = short_url.rsplit('/').next().unwrap();

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target?q=1");
}

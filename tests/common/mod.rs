#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;
use url_shortener::application::services::ShortenerService;
use url_shortener::infrastructure::persistence::SqliteMappingRepository;
use url_shortener::metrics::Metrics;
use url_shortener::state::AppState;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteMappingRepository::new(pool));
    let shortener = Arc::new(ShortenerService::new(repository, 6));
    let metrics = Arc::new(Metrics::new().unwrap());

    AppState { shortener, metrics }
}

pub async fn create_test_mapping(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (code, long_url) VALUES (?1, ?2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

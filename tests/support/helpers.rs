// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use kiji_api::application::{ports::time::Clock, services::ApplicationServices};
use kiji_api::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use kiji_api::infrastructure::{
    database,
    repositories::{SqliteArticleReadRepository, SqliteArticleWriteRepository},
    time::SystemClock,
};
use kiji_api::presentation::http::{routes::build_router, state::HttpState};
use once_cell::sync::Lazy;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
        .try_init();
});

pub fn build_router_with_repos(
    write_repo: Arc<dyn ArticleWriteRepository>,
    read_repo: Arc<dyn ArticleReadRepository>,
    clock: Arc<dyn Clock>,
) -> axum::Router {
    Lazy::force(&TRACING);
    let services = Arc::new(ApplicationServices::new(write_repo, read_repo, clock));
    build_router(HttpState { services })
}

/// Production router over an in-memory SQLite database with migrations
/// applied. One connection, so the database lives as long as the pool.
pub async fn make_test_router() -> axum::Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    database::run_migrations(&pool).await.expect("run migrations");
    let pool = Arc::new(pool);

    let write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    build_router_with_repos(write_repo, read_repo, clock)
}

pub fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_bytes(resp: Response) -> (StatusCode, Vec<u8>) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let (status, bytes) = read_bytes(resp).await;
    let json = serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!(
            "expected JSON body, got error {err}: {}",
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, json)
}

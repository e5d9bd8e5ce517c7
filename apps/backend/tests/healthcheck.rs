mod common;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use async_trait::async_trait;
use backend_test_support::error_body::assert_error_body;
use common::{create_test_app, get_json};
use mancala_backend::build_state;
use mancala_backend::domain::GameState;
use mancala_backend::store::{GameStore, StoreError};
use mancala_backend::AppState;

/// A store whose backend has gone away.
struct DownStore;

#[async_trait]
impl GameStore for DownStore {
    async fn put(&self, _state: &GameState) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn get(&self, _id: &str) -> Result<Option<GameState>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    fn backend(&self) -> &'static str {
        "down"
    }
}

async fn down_state() -> AppState {
    build_state()
        .with_store_instance(Arc::new(DownStore))
        .build()
        .await
        .expect("state with injected store")
}

#[actix_web::test]
async fn root_serves_banner() {
    let app = create_test_app(AppState::in_memory()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), b"Mancala Game API");
}

#[actix_web::test]
async fn health_reports_store_and_version() {
    let app = create_test_app(AppState::in_memory()).await;

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body.get("store_error").is_none());
    assert!(body["time"].as_str().is_some_and(|t| t.contains('T')));
}

#[actix_web::test]
async fn health_degrades_when_store_is_down() {
    let app = create_test_app(down_state().await).await;

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, 503);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["store"], "down");
    assert!(body["store_error"]
        .as_str()
        .is_some_and(|e| e.contains("connection refused")));
}

#[actix_web::test]
async fn store_outage_surfaces_as_service_unavailable() {
    let app = create_test_app(down_state().await).await;

    let req = test::TestRequest::get().uri("/start").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, "STORE_UNAVAILABLE", StatusCode::SERVICE_UNAVAILABLE, None).await;

    let req = test::TestRequest::get()
        .uri("/move?id=any&player=0&pit=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(
        resp,
        "STORE_UNAVAILABLE",
        StatusCode::SERVICE_UNAVAILABLE,
        Some("connection refused"),
    )
    .await;
}

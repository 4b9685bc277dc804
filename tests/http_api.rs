//! HTTP API Tests
//!
//! End-to-end request scenarios against the full router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use risk_tracker::config::Config;
use risk_tracker::http_server::build_router;
use risk_tracker::risk::RiskStore;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup() -> (Arc<RiskStore>, Router) {
    let store = Arc::new(RiskStore::new());
    let router = build_router(store.clone(), &Config::default());
    (store, router)
}

async fn call(router: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn test_create_then_fetch() {
    let (_store, router) = setup();

    let (status, created) = call(
        &router,
        "POST",
        "/v1/risks",
        Some(r#"{"state":"open","title":"t","description":"d"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["state"], "open");
    assert_eq!(created["created_at"], created["updated_at"]);
    assert!(created["created_at"].is_i64());

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = call(&router, "GET", &format!("/v1/risks/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_unknown_field_stores_nothing() {
    let (store, router) = setup();

    let (status, body) = call(
        &router,
        "POST",
        "/v1/risks",
        Some(r#"{"state":"open","extra":"x"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn test_bogus_state_stores_nothing() {
    let (store, router) = setup();
    store.create("open", "existing", "").unwrap();

    let (status, _) = call(&router, "POST", "/v1/risks", Some(r#"{"state":"bogus"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(store.len().unwrap(), 1);
}

#[tokio::test]
async fn test_malformed_body() {
    let (_store, router) = setup();

    let (status, _) = call(&router, "POST", "/v1/risks", Some("{")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&router, "POST", "/v1/risks", Some(r#"{"title":"no state"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_pagination() {
    let (store, router) = setup();
    for title in ["A", "B", "C"] {
        store.create("accepted", title, "").unwrap();
    }

    let (status, body) = call(&router, "GET", "/v1/risks?limit=1&offset=1", None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["B"]);

    let (status, body) = call(&router, "GET", "/v1/risks?limit=-1&offset=0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, body) = call(&router, "GET", "/v1/risks?offset=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(vec![]));
}

#[tokio::test]
async fn test_not_found_and_invalid_identifier() {
    let (_store, router) = setup();

    let id = uuid::Uuid::new_v4();
    let (status, body) = call(&router, "GET", &format!("/v1/risks/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains(&id.to_string()));

    let (status, _) = call(&router, "GET", "/v1/risks/12345", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_repeated_pagination_params_use_first_value() {
    let (store, router) = setup();
    for title in ["A", "B", "C"] {
        store.create("open", title, "").unwrap();
    }

    let (status, body) = call(&router, "GET", "/v1/risks?limit=1&limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["A"]);
}

#[tokio::test]
async fn test_trailing_slash_collection_paths() {
    let (store, router) = setup();

    let (status, created) = call(&router, "POST", "/v1/risks/", Some(r#"{"state":"closed","title":null}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["title"], "");

    let (status, body) = call(&router, "GET", "/v1/risks/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(store.len().unwrap(), 1);
}

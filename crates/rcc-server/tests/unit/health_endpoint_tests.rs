//! Tests for the store health endpoint

use crate::test_utils::{UnreachableStore, client_with_store, in_memory_client};
use rcc_providers::NullCacheProvider;
use rocket::http::Status;
use std::sync::Arc;

#[rocket::async_test]
async fn test_reachable_store_reports_connected() {
    let client = in_memory_client().await;

    let response = client.get("/api/redis-check").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().await.expect("body")).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "connected" }));
}

#[rocket::async_test]
async fn test_unreachable_store_reports_error() {
    let client = client_with_store(Arc::new(UnreachableStore)).await;

    let response = client.get("/api/redis-check").dispatch().await;

    assert_eq!(response.status(), Status::InternalServerError);
    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().await.expect("body")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "status": "error", "message": "Failed to connect to Redis" })
    );
}

#[rocket::async_test]
async fn test_disabled_cache_reports_error() {
    let client = client_with_store(Arc::new(NullCacheProvider::new())).await;

    let response = client.get("/api/redis-check").dispatch().await;

    assert_eq!(response.status(), Status::InternalServerError);
    let json: serde_json::Value =
        serde_json::from_str(&response.into_string().await.expect("body")).unwrap();
    assert_eq!(json["status"], "error");
}

#[rocket::async_test]
async fn test_cors_headers_present() {
    let client = in_memory_client().await;

    let response = client.get("/api/redis-check").dispatch().await;

    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
}

#[rocket::async_test]
async fn test_preflight_is_answered() {
    let client = in_memory_client().await;

    let response = client.options("/api/process-text").dispatch().await;

    assert_eq!(response.status(), Status::NoContent);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Methods"),
        Some("GET, POST, OPTIONS")
    );
}

//! Tests for the text processing endpoint

use crate::test_utils::{UnreachableStore, client_with_store, in_memory_client};
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use std::sync::Arc;

const PROFILE: &str = "Experienced engineering leader with strong communication skills";

async fn post_text(client: &Client, text: &str, use_cache: bool) -> serde_json::Value {
    let response = client
        .post("/api/process-text")
        .header(ContentType::JSON)
        .body(serde_json::json!({ "text": text, "useCache": use_cache }).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    serde_json::from_str(&response.into_string().await.expect("body")).unwrap()
}

#[rocket::async_test]
async fn test_second_request_is_cache_hit() {
    let client = in_memory_client().await;

    let first = post_text(&client, PROFILE, true).await;
    let second = post_text(&client, PROFILE, true).await;

    assert_eq!(first["cacheHit"], false);
    assert_eq!(second["cacheHit"], true);
    assert_eq!(first["result"], second["result"]);
    assert!(first["timeTaken"].is_u64());
}

#[rocket::async_test]
async fn test_use_cache_false_never_hits() {
    let client = in_memory_client().await;

    post_text(&client, PROFILE, false).await;
    let second = post_text(&client, PROFILE, false).await;

    assert_eq!(second["cacheHit"], false);
}

#[rocket::async_test]
async fn test_report_content() {
    let client = in_memory_client().await;

    let body = post_text(&client, PROFILE, true).await;
    let result = body["result"].as_str().unwrap();

    assert!(result.starts_with("Analysis of candidate profile:\n"));
    assert!(result.contains("- Strong technical background in engineering\n"));
    assert!(result.contains("- Advanced communication skills\n"));
    assert!(result.ends_with("Recommendation: Potential candidate, consider additional screening\n"));
}

#[rocket::async_test]
async fn test_unreachable_store_still_answers() {
    let client = client_with_store(Arc::new(UnreachableStore)).await;

    let first = post_text(&client, PROFILE, true).await;
    let second = post_text(&client, PROFILE, true).await;

    assert_eq!(first["cacheHit"], false);
    assert_eq!(second["cacheHit"], false);
    assert_eq!(first["result"], second["result"]);
}

#[rocket::async_test]
async fn test_missing_field_is_rejected() {
    let client = in_memory_client().await;

    let response = client
        .post("/api/process-text")
        .header(ContentType::JSON)
        .body(r#"{"text": "profile"}"#)
        .dispatch()
        .await;

    assert!(response.status().class().is_client_error());
}

#[rocket::async_test]
async fn test_malformed_json_is_rejected() {
    let client = in_memory_client().await;

    let response = client
        .post("/api/process-text")
        .header(ContentType::JSON)
        .body("not json")
        .dispatch()
        .await;

    assert!(response.status().class().is_client_error());
}

//! Store health endpoint

use crate::constants::{STORE_STATUS_CONNECTED, STORE_STATUS_ERROR, STORE_UNREACHABLE_MESSAGE};
use rcc_infrastructure::di::AppContext;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, get};
use serde::{Deserialize, Serialize};

/// Body of the store health response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStatusResponse {
    /// `connected` or `error`
    pub status: String,
    /// Present only on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StoreStatusResponse {
    /// Store answered
    pub fn connected() -> Self {
        Self {
            status: STORE_STATUS_CONNECTED.to_string(),
            message: None,
        }
    }

    /// Store unreachable
    pub fn unreachable() -> Self {
        Self {
            status: STORE_STATUS_ERROR.to_string(),
            message: Some(STORE_UNREACHABLE_MESSAGE.to_string()),
        }
    }
}

/// Ping the result store
///
/// GET /api/redis-check
///
/// The failure cause is logged by the health checker; the body keeps the
/// fixed message.
#[get("/redis-check")]
pub async fn redis_check(context: &State<AppContext>) -> (Status, Json<StoreStatusResponse>) {
    let check = context.store_health().check_health().await;

    if check.status.is_healthy() {
        (Status::Ok, Json(StoreStatusResponse::connected()))
    } else {
        (
            Status::InternalServerError,
            Json(StoreStatusResponse::unreachable()),
        )
    }
}

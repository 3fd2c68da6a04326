//! Text processing endpoint

use rcc_domain::value_objects::{CachePolicy, ProcessedText};
use rcc_infrastructure::di::AppContext;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, post};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Request body for text processing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessTextRequest {
    /// Raw profile text
    pub text: String,
    /// Whether the store may be read and written
    pub use_cache: bool,
}

/// Error body for failed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure description
    pub error: String,
}

/// Analyze text, serving a stored result when allowed
///
/// POST /api/process-text
#[post("/process-text", format = "json", data = "<request>")]
pub async fn process_text(
    context: &State<AppContext>,
    request: Json<ProcessTextRequest>,
) -> Result<Json<ProcessedText>, (Status, Json<ErrorResponse>)> {
    let request = request.into_inner();
    let policy = CachePolicy::from(request.use_cache);

    match context.text_processing().process(&request.text, policy).await {
        Ok(processed) => {
            info!(
                cache_hit = processed.cache_hit,
                time_taken_ms = processed.time_taken_ms,
                "Processed text"
            );
            Ok(Json(processed))
        }
        Err(e) => {
            error!(error = %e, "Text processing failed");
            Err((
                Status::InternalServerError,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

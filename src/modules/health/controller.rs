use axum::Json;
use chrono::Utc;

use gradebook_models::ReadyResponse;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse)
    ),
    tag = "Health"
)]
pub async fn readiness() -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "ready".to_string(),
        time: Utc::now(),
    })
}

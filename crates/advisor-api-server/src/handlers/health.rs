use axum::{http::StatusCode, Json};

use crate::models::chat::StatusResponse;

/// GET / - liveness probe for the hosting platform and the frontend.
pub async fn health_check() -> (StatusCode, Json<StatusResponse>) {
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "API is running".to_string(),
        }),
    )
}

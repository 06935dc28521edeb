use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::{HealthDto, WelcomeDto};

pub static HEALTH_TAG: &str = "health";

const API_VERSION: &str = "1.0.0";

/// API welcome message with a pointer to the interactive documentation.
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "API is up", body = WelcomeDto)
    ),
)]
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(WelcomeDto {
            message: "Welcome to Zelux API".to_string(),
            version: API_VERSION.to_string(),
            status: "healthy".to_string(),
            docs: "/docs".to_string(),
        }),
    )
}

/// Liveness probe for load balancers.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "healthy".to_string(),
            service: "zelux-api".to_string(),
        }),
    )
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        stylist::{AvailabilityDto, ServiceDto, StylistDetailDto},
    },
    server::{error::AppError, service::stylist::StylistService, state::AppState},
};

/// Tag for grouping stylist endpoints in OpenAPI documentation
pub static STYLIST_TAG: &str = "stylists";

#[derive(Deserialize)]
pub struct AvailabilityParams {
    /// Day to list slots for, `YYYY-MM-DD`.
    pub date: String,
}

fn stylist_not_found() -> AppError {
    AppError::NotFound("Stylist not found".to_string())
}

/// Get a stylist with their services and salon.
///
/// # Access Control
/// - `Public`
///
/// # Returns
/// - `200 OK` - Stylist detail
/// - `404 Not Found` - No stylist with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/stylists/{stylist_id}",
    tag = STYLIST_TAG,
    params(
        ("stylist_id" = String, Path, description = "Stylist ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved stylist", body = StylistDetailDto),
        (status = 404, description = "Stylist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stylist(
    State(state): State<AppState>,
    Path(stylist_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let detail = StylistService::new(&state.db)
        .get_detail(&stylist_id)
        .await?
        .ok_or_else(stylist_not_found)?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Get the active services of a stylist, ordered by name.
///
/// # Returns
/// - `200 OK` - Services
/// - `404 Not Found` - No stylist with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/stylists/{stylist_id}/services",
    tag = STYLIST_TAG,
    params(
        ("stylist_id" = String, Path, description = "Stylist ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved services", body = Vec<ServiceDto>),
        (status = 404, description = "Stylist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stylist_services(
    State(state): State<AppState>,
    Path(stylist_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let services = StylistService::new(&state.db)
        .get_services(&stylist_id)
        .await?
        .ok_or_else(stylist_not_found)?;

    let dtos: Vec<ServiceDto> = services.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get the open appointment slots of a stylist for one day.
///
/// Slots follow a fixed daily schedule and do not yet account for existing bookings.
///
/// # Returns
/// - `200 OK` - Slot start times
/// - `400 Bad Request` - Date is not `YYYY-MM-DD`
/// - `404 Not Found` - No stylist with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/stylists/{stylist_id}/availability",
    tag = STYLIST_TAG,
    params(
        ("stylist_id" = String, Path, description = "Stylist ID"),
        ("date" = String, Query, description = "Day in YYYY-MM-DD format")
    ),
    responses(
        (status = 200, description = "Successfully retrieved availability", body = AvailabilityDto),
        (status = 400, description = "Invalid date format", body = ErrorDto),
        (status = 404, description = "Stylist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stylist_availability(
    State(state): State<AppState>,
    Path(stylist_id): Path<String>,
    Query(params): Query<AvailabilityParams>,
) -> Result<impl IntoResponse, AppError> {
    let availability = StylistService::new(&state.db)
        .get_availability(&stylist_id, &params.date)
        .await?
        .ok_or_else(stylist_not_found)?;

    Ok((StatusCode::OK, Json(availability.into_dto())))
}

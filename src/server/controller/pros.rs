//! Mobile-facing aliases of the stylist endpoints, addressing stylists as "pros".

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
        stylist::{ServiceDto, StylistDetailDto, StylistDto},
    },
    server::{
        error::AppError,
        model::{pagination::PageRequest, stylist::ProFilter},
        service::stylist::StylistService,
        state::AppState,
    },
};

/// Tag for grouping pro endpoints in OpenAPI documentation
pub static PROS_TAG: &str = "pros";

#[derive(Deserialize)]
pub struct ProListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub city: Option<String>,
    pub min_rating: Option<f64>,
}

fn pro_not_found() -> AppError {
    AppError::NotFound("Professional not found".to_string())
}

/// List active professionals, best rated first.
///
/// Returns a plain list for the requested page, without a total count. The `service`
/// query parameter sent by the mobile client is not a filter and is ignored.
///
/// # Access Control
/// - `Public`
///
/// # Returns
/// - `200 OK` - Professionals with their active services
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/pros",
    tag = PROS_TAG,
    params(
        ("page" = Option<i64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("page_size" = Option<i64>, Query, description = "Items per page, 1 to 100 (default: 10)"),
        ("city" = Option<String>, Query, description = "Filter by salon city"),
        ("min_rating" = Option<f64>, Query, description = "Minimum rating, inclusive")
    ),
    responses(
        (status = 200, description = "Successfully retrieved professionals", body = Vec<StylistDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pros(
    State(state): State<AppState>,
    Query(params): Query<ProListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRequest::new(params.page, params.page_size);
    let filter = ProFilter {
        city: params.city,
        min_rating: params.min_rating,
    };

    let pros = StylistService::new(&state.db)
        .list_pros(&filter, page)
        .await?;

    let dtos: Vec<StylistDto> = pros.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/v1/pros/{pro_id}",
    tag = PROS_TAG,
    params(
        ("pro_id" = String, Path, description = "Professional (stylist) ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved professional", body = StylistDetailDto),
        (status = 404, description = "Professional not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pro(
    State(state): State<AppState>,
    Path(pro_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let detail = StylistService::new(&state.db)
        .get_detail(&pro_id)
        .await?
        .ok_or_else(pro_not_found)?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/pros/{pro_id}/services",
    tag = PROS_TAG,
    params(
        ("pro_id" = String, Path, description = "Professional (stylist) ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved services", body = Vec<ServiceDto>),
        (status = 404, description = "Professional not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pro_services(
    State(state): State<AppState>,
    Path(pro_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let services = StylistService::new(&state.db)
        .get_services(&pro_id)
        .await?
        .ok_or_else(pro_not_found)?;

    let dtos: Vec<ServiceDto> = services.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

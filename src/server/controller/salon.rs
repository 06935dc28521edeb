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
        salon::{PaginatedSalonsDto, SalonDto},
        stylist::StylistDto,
    },
    server::{
        error::AppError,
        model::{pagination::PageRequest, salon::SalonFilter},
        service::salon::SalonService,
        state::AppState,
    },
};

/// Tag for grouping salon endpoints in OpenAPI documentation
pub static SALON_TAG: &str = "salons";

#[derive(Deserialize)]
pub struct SalonListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub city: Option<String>,
    pub search: Option<String>,
}

/// Get paginated active salons.
///
/// Salons are ordered by rating, best first. `city` and `search` are case-insensitive
/// substring filters; `search` matches the name or description.
///
/// # Access Control
/// - `Public`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination and filter parameters
///
/// # Returns
/// - `200 OK` - Page of salons
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/salons",
    tag = SALON_TAG,
    params(
        ("page" = Option<i64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("page_size" = Option<i64>, Query, description = "Items per page, 1 to 100 (default: 10)"),
        ("city" = Option<String>, Query, description = "Filter by city"),
        ("search" = Option<String>, Query, description = "Search in name and description")
    ),
    responses(
        (status = 200, description = "Successfully retrieved salons", body = PaginatedSalonsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_salons(
    State(state): State<AppState>,
    Query(params): Query<SalonListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRequest::new(params.page, params.page_size);
    let filter = SalonFilter {
        city: params.city,
        search: params.search,
    };

    let salons = SalonService::new(&state.db)
        .get_paginated(&filter, page)
        .await?;

    Ok((StatusCode::OK, Json(salons.into_dto())))
}

/// Get a salon by ID.
///
/// # Returns
/// - `200 OK` - Salon
/// - `404 Not Found` - No salon with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/salons/{salon_id}",
    tag = SALON_TAG,
    params(
        ("salon_id" = String, Path, description = "Salon ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved salon", body = SalonDto),
        (status = 404, description = "Salon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_salon_by_id(
    State(state): State<AppState>,
    Path(salon_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let salon = SalonService::new(&state.db)
        .get_by_id(&salon_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Salon not found".to_string()))?;

    Ok((StatusCode::OK, Json(salon.into_dto())))
}

/// Get the active stylists of a salon, best rated first.
///
/// # Returns
/// - `200 OK` - Stylists with their active services
/// - `404 Not Found` - No salon with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/salons/{salon_id}/stylists",
    tag = SALON_TAG,
    params(
        ("salon_id" = String, Path, description = "Salon ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved stylists", body = Vec<StylistDto>),
        (status = 404, description = "Salon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_salon_stylists(
    State(state): State<AppState>,
    Path(salon_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let stylists = SalonService::new(&state.db)
        .get_stylists(&salon_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Salon not found".to_string()))?;

    let dtos: Vec<StylistDto> = stylists.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

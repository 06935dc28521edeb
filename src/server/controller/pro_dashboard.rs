use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        booking::BookingStatusDto,
        pro::{
            ClientDetailDto, ClientDto, DashboardStatsDto, EarningsDto, PaginatedProBookingsDto,
            ProBookingDto, UpdateBookingStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{booking::BookingStatus, pagination::PageRequest, pro::EarningsPeriod},
        service::pro_dashboard::ProDashboardService,
        state::AppState,
    },
};

/// Tag for grouping stylist dashboard endpoints in OpenAPI documentation
pub static PRO_DASHBOARD_TAG: &str = "pro-dashboard";

#[derive(Deserialize)]
pub struct ProBookingListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub status: Option<BookingStatusDto>,
}

#[derive(Deserialize)]
pub struct EarningsParams {
    pub period: Option<String>,
}

/// Get booking and earnings figures for the authenticated stylist.
///
/// Day boundaries are in UTC. Cancelled bookings are not counted.
///
/// # Access Control
/// - `Stylist` - Authenticated user linked to a stylist profile
///
/// # Returns
/// - `200 OK` - Dashboard figures
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User has no stylist profile
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/pro/dashboard/stats",
    tag = PRO_DASHBOARD_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully retrieved stats", body = DashboardStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User has no stylist profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.credentials, &headers)
        .require()
        .await?;

    let stats = ProDashboardService::new(&state.db).get_stats(&user).await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Get paginated bookings made with the authenticated stylist.
///
/// # Access Control
/// - `Stylist` - Authenticated user linked to a stylist profile
///
/// # Returns
/// - `200 OK` - Page of bookings with customer details
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User has no stylist profile
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/pro/bookings",
    tag = PRO_DASHBOARD_TAG,
    security(("bearer" = [])),
    params(
        ("page" = Option<i64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("page_size" = Option<i64>, Query, description = "Items per page, 1 to 100 (default: 10)"),
        ("status" = Option<BookingStatusDto>, Query, description = "Filter by booking status")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = PaginatedProBookingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User has no stylist profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pro_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ProBookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.credentials, &headers)
        .require()
        .await?;

    let page = PageRequest::new(params.page, params.page_size);
    let status = params.status.map(BookingStatus::from);

    let bookings = ProDashboardService::new(&state.db)
        .get_bookings(&user, status, page)
        .await?;

    Ok((StatusCode::OK, Json(bookings.into_dto())))
}

/// Move a booking of the authenticated stylist to a new status.
///
/// Pending bookings can be confirmed, cancelled, completed or marked as no-show;
/// confirmed bookings can be cancelled, completed or marked as no-show. Cancelled,
/// completed and no-show bookings are final.
///
/// # Access Control
/// - `Stylist` - Only the stylist the booking was made with
///
/// # Returns
/// - `200 OK` - Updated booking
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - No stylist profile, or booking is with another stylist
/// - `404 Not Found` - No booking with that ID
/// - `409 Conflict` - Transition not allowed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/pro/bookings/{booking_id}/status",
    tag = PRO_DASHBOARD_TAG,
    security(("bearer" = [])),
    params(
        ("booking_id" = String, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Booking status updated", body = ProBookingDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to update this booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Status transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<String>,
    Json(payload): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.credentials, &headers)
        .require()
        .await?;

    let booking = ProDashboardService::new(&state.db)
        .update_booking_status(
            &user,
            &booking_id,
            BookingStatus::from(payload.status),
            payload.stylist_notes,
        )
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// List the customers of the authenticated stylist, most recent visit first.
///
/// Visits and spending are totalled over non-cancelled bookings.
///
/// # Access Control
/// - `Stylist` - Authenticated user linked to a stylist profile
///
/// # Returns
/// - `200 OK` - Clients with visit totals
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User has no stylist profile
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/pro/clients",
    tag = PRO_DASHBOARD_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully retrieved clients", body = Vec<ClientDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User has no stylist profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.credentials, &headers)
        .require()
        .await?;

    let clients = ProDashboardService::new(&state.db)
        .get_clients(&user)
        .await?;

    let dtos: Vec<ClientDto> = clients.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one customer of the authenticated stylist with their booking history.
///
/// # Access Control
/// - `Stylist` - Authenticated user linked to a stylist profile
///
/// # Returns
/// - `200 OK` - Client totals and visits, most recent first
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User has no stylist profile
/// - `404 Not Found` - Customer never booked the stylist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/pro/clients/{client_id}",
    tag = PRO_DASHBOARD_TAG,
    security(("bearer" = [])),
    params(
        ("client_id" = String, Path, description = "Customer user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved client", body = ClientDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User has no stylist profile", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.credentials, &headers)
        .require()
        .await?;

    let client = ProDashboardService::new(&state.db)
        .get_client(&user, &client_id)
        .await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

/// Get the authenticated stylist's earnings over a period ending today.
///
/// Periods are rolling UTC windows of 1, 7, 30 or 365 days, today included. Cancelled
/// bookings are not counted.
///
/// # Access Control
/// - `Stylist` - Authenticated user linked to a stylist profile
///
/// # Returns
/// - `200 OK` - Totals and the bookings behind them
/// - `400 Bad Request` - Unknown period
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User has no stylist profile
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/pro/earnings",
    tag = PRO_DASHBOARD_TAG,
    security(("bearer" = [])),
    params(
        ("period" = Option<String>, Query, description = "today, week, month or year (default: week)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved earnings", body = EarningsDto),
        (status = 400, description = "Unknown period", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User has no stylist profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_earnings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<EarningsParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.credentials, &headers)
        .require()
        .await?;

    let period = match params.period.as_deref() {
        None => EarningsPeriod::default(),
        Some(value) => EarningsPeriod::parse(value).ok_or_else(|| {
            AppError::BadRequest("Invalid period. Use today, week, month or year".to_string())
        })?,
    };

    let earnings = ProDashboardService::new(&state.db)
        .get_earnings(&user, period)
        .await?;

    Ok((StatusCode::OK, Json(earnings.into_dto())))
}

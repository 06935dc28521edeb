use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{BookingDto, BookingStatusDto, CreateBookingDto, PaginatedBookingsDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            booking::{BookingStatus, CreateBookingParams},
            pagination::PageRequest,
        },
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "bookings";

#[derive(Deserialize)]
pub struct BookingListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub status: Option<BookingStatusDto>,
}

/// Book a service with a stylist.
///
/// The booking is created pending and unpaid, with the service's current duration and
/// price copied onto it.
///
/// # Access Control
/// - `Authenticated` - The booking is created for the authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer credential
/// - `payload` - Stylist, service, appointment time and optional notes
///
/// # Returns
/// - `200 OK` - Created booking with stylist, service and salon names
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Unknown service or stylist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = BOOKING_TAG,
    security(("bearer" = [])),
    request_body = CreateBookingDto,
    responses(
        (status = 200, description = "Successfully created booking", body = BookingDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Service or stylist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.credentials, &headers)
        .require()
        .await?;

    let booking = BookingService::new(&state.db)
        .create(CreateBookingParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Get paginated bookings of a user, most recently scheduled first.
///
/// # Access Control
/// - `Authenticated` - Users can only list their own bookings
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer credential
/// - `user_id` - User whose bookings are listed
/// - `params` - Pagination parameters and optional status filter
///
/// # Returns
/// - `200 OK` - Page of bookings
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - `user_id` is not the authenticated user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{user_id}",
    tag = BOOKING_TAG,
    security(("bearer" = [])),
    params(
        ("user_id" = String, Path, description = "User ID"),
        ("page" = Option<i64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("page_size" = Option<i64>, Query, description = "Items per page, 1 to 100 (default: 10)"),
        ("status" = Option<BookingStatusDto>, Query, description = "Filter by booking status")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bookings", body = PaginatedBookingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to view these bookings", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    Query(params): Query<BookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.credentials, &headers)
        .require()
        .await?;

    let page = PageRequest::new(params.page, params.page_size);
    let status = params.status.map(BookingStatus::from);

    let bookings = BookingService::new(&state.db)
        .get_paginated_for_user(&user_id, &user, status, page)
        .await?;

    Ok((StatusCode::OK, Json(bookings.into_dto())))
}

/// Get a single booking of the authenticated user.
///
/// # Access Control
/// - `Authenticated` - Only the customer who made the booking
///
/// # Returns
/// - `200 OK` - Booking with stylist, service and salon names
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Booking belongs to another user
/// - `404 Not Found` - No booking with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/bookings/details/{booking_id}",
    tag = BOOKING_TAG,
    security(("bearer" = [])),
    params(
        ("booking_id" = String, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved booking", body = BookingDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to view this booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.credentials, &headers)
        .require()
        .await?;

    let booking = BookingService::new(&state.db)
        .get_by_id(&booking_id, &user)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Cancel a booking of the authenticated user.
///
/// Cancelling an already cancelled booking succeeds again.
///
/// # Access Control
/// - `Authenticated` - Only the customer who made the booking
///
/// # Returns
/// - `200 OK` - Booking cancelled
/// - `400 Bad Request` - Booking is already completed
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Booking belongs to another user
/// - `404 Not Found` - No booking with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/v1/bookings/{booking_id}/cancel",
    tag = BOOKING_TAG,
    security(("bearer" = [])),
    params(
        ("booking_id" = String, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = MessageDto),
        (status = 400, description = "Cannot cancel a completed booking", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to cancel this booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.credentials, &headers)
        .require()
        .await?;

    BookingService::new(&state.db)
        .cancel(&booking_id, &user)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Booking cancelled successfully".to_string(),
        }),
    ))
}

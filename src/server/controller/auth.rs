use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, LoginResponseDto, RegisterUserDto, TokenDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{CreateUserParams, UpdateUserParams},
        service::auth::{mock_login, AuthService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Exchange a bearer credential for an API access token.
///
/// Verifies the credential in the `Authorization` header and returns a freshly signed
/// access token. Identities from an external provider are turned into a user on first
/// sight, linking to an existing account with the same email when there is one.
///
/// # Access Control
/// - `Public` - Any verifiable bearer credential
///
/// # Arguments
/// - `state` - Application state containing the database and credential chain
/// - `headers` - Request headers carrying the bearer credential
///
/// # Returns
/// - `200 OK` - Access token and the user it belongs to
/// - `400 Bad Request` - External identity carries no email address
/// - `401 Unauthorized` - Missing or invalid credential
/// - `404 Not Found` - Access token names a user that no longer exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/auth/verify-token",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Credential accepted", body = TokenDto),
        (status = 400, description = "Identity has no email address", body = ErrorDto),
        (status = 401, description = "Missing or invalid credential", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.db, &state.credentials, &headers).identity()?;

    let grant = AuthService::new(&state.db, &state.tokens)
        .exchange(identity)
        .await?;

    Ok((StatusCode::OK, Json(grant.into_dto())))
}

/// Development login.
///
/// Returns a canned account chosen by email without checking any password. The returned
/// token is not accepted by protected endpoints.
///
/// # Access Control
/// - `Public`
///
/// # Returns
/// - `200 OK` - Canned token and account
/// - `400 Bad Request` - Neither email nor phone supplied
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Canned account", body = LoginResponseDto),
        (status = 400, description = "Email or phone is required", body = ErrorDto)
    ),
)]
pub async fn login(Json(payload): Json<LoginDto>) -> Result<impl IntoResponse, AppError> {
    let response = mock_login::login(payload)?;

    Ok((StatusCode::OK, Json(response)))
}

/// Register a new user.
///
/// # Access Control
/// - `Public`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Email, display name and optional profile fields
///
/// # Returns
/// - `200 OK` - Access token for the new user
/// - `400 Bad Request` - Malformed email or email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "User registered", body = TokenDto),
        (status = 400, description = "Invalid or duplicate email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let grant = AuthService::new(&state.db, &state.tokens)
        .register(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(grant.into_dto())))
}

/// Get the authenticated user.
///
/// # Access Control
/// - `Authenticated`
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Missing or invalid credential, or no stored user for it
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.credentials, &headers)
        .require()
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the authenticated user's profile.
///
/// Only fields present in the body are changed.
///
/// # Access Control
/// - `Authenticated`
///
/// # Returns
/// - `200 OK` - Updated user
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - User was removed concurrently
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/v1/auth/me",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.credentials, &headers)
        .require()
        .await?;

    let updated = AuthService::new(&state.db, &state.tokens)
        .update_profile(&user.id, UpdateUserParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer <token>` header, or the header was malformed.
    #[error("Missing bearer credential")]
    MissingCredential,

    /// Bearer credential was present but no verifier accepted it.
    ///
    /// The reason is only logged, never returned to the client.
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// Credential verified but the identity it names has no user record.
    #[error("User for subject {0} not found in database")]
    UserNotInDatabase(String),

    /// Authenticated user is not allowed to touch the requested resource.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Reason for denial, logged at debug level
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(String, String),

    /// Signing an access token failed.
    #[error("Failed to issue access token: {0}")]
    TokenIssue(#[from] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and generic error messages:
/// - `MissingCredential` / `InvalidCredential` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `TokenIssue` → 500 Internal Server Error
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingCredential | Self::InvalidCredential(_) | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Could not validate credentials".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Not authorized to access this resource".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::TokenIssue(err) => {
                tracing::error!("Failed to issue access token: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

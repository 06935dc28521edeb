use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::{
        credential::{CredentialChain, VerifiedIdentity},
        resolve_user,
    },
};

const BEARER_SCHEME: &str = "bearer";

/// Authenticates a request from its `Authorization: Bearer <credential>` header.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    credentials: &'a CredentialChain,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        credentials: &'a CredentialChain,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            credentials,
            headers,
        }
    }

    /// Verifies the bearer credential without touching the database.
    ///
    /// # Returns
    /// - `Ok(VerifiedIdentity)` - Credential accepted by the chain
    /// - `Err(AuthError::MissingCredential)` - No header, or not a bearer header
    /// - `Err(AuthError::InvalidCredential)` - No verifier accepted the credential
    pub fn identity(&self) -> Result<VerifiedIdentity, AuthError> {
        let credential = bearer_credential(self.headers).ok_or(AuthError::MissingCredential)?;

        self.credentials.verify(credential)
    }

    /// Verifies the bearer credential and loads the user it names.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user
    /// - `Err(AppError::AuthErr)` - Missing or invalid credential, or no stored user for it
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn require(&self) -> Result<User, AppError> {
        let identity = self.identity()?;

        let Some(user) = resolve_user(self.db, &identity).await? else {
            return Err(AuthError::UserNotInDatabase(identity.subject).into());
        };

        Ok(user)
    }
}

/// Extracts the credential from an `Authorization: Bearer <credential>` header.
///
/// The scheme is matched case-insensitively. Returns `None` for missing headers, other
/// schemes and empty credentials.
fn bearer_credential(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, credential) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let credential = credential.trim();
    if credential.is_empty() {
        None
    } else {
        Some(credential)
    }
}

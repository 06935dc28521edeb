//! Authentication service.
//!
//! Maps verified bearer identities onto stored users, exchanges them for access tokens
//! issued by this service and handles registration and profile updates. Credential
//! verification itself lives in `credential`, token signing in `token`.

pub mod credential;
pub mod mock_login;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{AccessGrant, CreateUserParams, UpdateUserParams, User},
    service::auth::{
        credential::{CredentialSource, VerifiedIdentity},
        token::TokenService,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service used to sign access tokens
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Finds the stored user a verified identity refers to.
    ///
    /// Our own access tokens carry the user ID as subject; other identities are looked up
    /// by their external UID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Identity maps to a stored user
    /// - `Ok(None)` - No user for this identity yet
    /// - `Err(AppError)` - Database error
    pub async fn resolve(&self, identity: &VerifiedIdentity) -> Result<Option<User>, AppError> {
        resolve_user(self.db, identity).await
    }

    /// Exchanges a verified identity for an access token, creating the user on first sight.
    ///
    /// External identities are matched by external UID first, then by email (linking the
    /// UID to the existing account). Identities from our own tokens must already exist.
    ///
    /// # Returns
    /// - `Ok(AccessGrant)` - Fresh access token and the user it names
    /// - `Err(AppError::NotFound)` - Own token whose user no longer exists
    /// - `Err(AppError::BadRequest)` - External identity without an email address
    /// - `Err(AppError)` - Database or signing error
    pub async fn exchange(&self, identity: VerifiedIdentity) -> Result<AccessGrant, AppError> {
        let user = match identity.external_uid() {
            None => self
                .resolve(&identity)
                .await?
                .ok_or_else(|| AppError::NotFound("User not found".to_string()))?,
            Some(external_uid) => self.find_or_create_external(external_uid, &identity).await?,
        };

        self.grant(user)
    }

    async fn find_or_create_external(
        &self,
        external_uid: &str,
        identity: &VerifiedIdentity,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_external_uid(external_uid).await? {
            return Ok(user);
        }

        let Some(email) = identity.email.as_deref() else {
            return Err(AppError::BadRequest(
                "Credential does not carry an email address".to_string(),
            ));
        };

        if let Some(existing) = user_repo.find_by_email(email).await? {
            return user_repo
                .link_external_uid(&existing.id, external_uid)
                .await?
                .ok_or_else(|| AppError::NotFound("User not found".to_string()));
        }

        let user = user_repo
            .create(CreateUserParams {
                id: None,
                external_uid: Some(external_uid.to_string()),
                email: email.to_string(),
                name: identity
                    .name
                    .clone()
                    .unwrap_or_else(|| default_display_name(email)),
                phone: None,
                profile_image_url: None,
                is_stylist: false,
            })
            .await?;

        tracing::info!("Created user {} for external identity", user.id);

        Ok(user)
    }

    /// Registers a new user and issues an access token for them.
    ///
    /// # Returns
    /// - `Ok(AccessGrant)` - Created user and its access token
    /// - `Err(AppError::BadRequest)` - Malformed email or email already registered
    /// - `Err(AppError)` - Database or signing error
    pub async fn register(&self, params: CreateUserParams) -> Result<AccessGrant, AppError> {
        if !params.email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "User with this email already exists".to_string(),
            ));
        }

        let user = user_repo.create(params).await?;

        self.grant(user)
    }

    /// Applies a profile update to the given user.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn update_profile(
        &self,
        user_id: &str,
        params: UpdateUserParams,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .update(user_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    fn grant(&self, user: User) -> Result<AccessGrant, AppError> {
        let access_token = self.tokens.issue(&user.id, Some(&user.email))?;

        Ok(AccessGrant { access_token, user })
    }
}

/// Looks up the stored user named by `identity` without creating one.
pub(crate) async fn resolve_user(
    db: &DatabaseConnection,
    identity: &VerifiedIdentity,
) -> Result<Option<User>, AppError> {
    let user_repo = UserRepository::new(db);

    let user = match identity.source {
        CredentialSource::AccessToken => user_repo.find_by_id(&identity.subject).await?,
        CredentialSource::Sentinel => user_repo.find_by_external_uid(&identity.subject).await?,
    };

    Ok(user)
}

/// Display name for users created without one: the local part of their email, or
/// "User" when that is empty.
fn default_display_name(email: &str) -> String {
    match email.split('@').next() {
        Some(local) if !local.is_empty() => local.to_string(),
        _ => "User".to_string(),
    }
}

//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .id("user-1")
///     .email("alice@example.com")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    external_uid: Option<String>,
    email: String,
    name: String,
    is_stylist: bool,
    is_admin: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: `"user-{n}"` where n is auto-incremented
    /// - email: `"user{n}@example.com"`
    /// - name: `"User {n}"`
    /// - no external uid, not a stylist, not an admin
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("user-{}", id),
            external_uid: None,
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            is_stylist: false,
            is_admin: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn external_uid(mut self, external_uid: impl Into<String>) -> Self {
        self.external_uid = Some(external_uid.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn stylist(mut self, is_stylist: bool) -> Self {
        self.is_stylist = is_stylist;
        self
    }

    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            external_uid: ActiveValue::Set(self.external_uid),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(None),
            profile_image_url: ActiveValue::Set(None),
            is_stylist: ActiveValue::Set(self.is_stylist),
            is_admin: ActiveValue::Set(self.is_admin),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

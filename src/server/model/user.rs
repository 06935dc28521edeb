//! User domain models and parameters.
//!
//! Users are created on first credential exchange or explicit registration and mutated
//! through profile updates. They are never deleted.

use chrono::{DateTime, Utc};

use crate::model::user::{RegisterUserDto, TokenDto, UpdateUserDto, UserDto};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    /// Subject assigned by the external identity provider, if the user signed in that way.
    pub external_uid: Option<String>,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub profile_image_url: Option<String>,
    pub is_stylist: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            external_uid: entity.external_uid,
            email: entity.email,
            name: entity.name,
            phone: entity.phone,
            profile_image_url: entity.profile_image_url,
            is_stylist: entity.is_stylist,
            is_admin: entity.is_admin,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            external_uid: self.external_uid,
            email: self.email,
            name: self.name,
            phone: self.phone,
            profile_image_url: self.profile_image_url,
            is_stylist: self.is_stylist,
            is_admin: self.is_admin,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    /// Explicit primary key; a random UUID is generated when `None`.
    pub id: Option<String>,
    pub external_uid: Option<String>,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub profile_image_url: Option<String>,
    pub is_stylist: bool,
}

impl CreateUserParams {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            id: None,
            external_uid: dto.external_uid,
            email: dto.email.trim().to_string(),
            name: dto.name,
            phone: dto.phone,
            profile_image_url: dto.profile_image_url,
            is_stylist: dto.is_stylist,
        }
    }
}

/// Profile fields a user can change about themselves. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub profile_image_url: Option<String>,
}

impl From<UpdateUserDto> for UpdateUserParams {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            profile_image_url: dto.profile_image_url,
        }
    }
}

/// Access token issued for a user together with the user it names.
#[derive(Debug, Clone)]
pub struct AccessGrant {
    pub access_token: String,
    pub user: User,
}

impl AccessGrant {
    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            access_token: self.access_token,
            token_type: "bearer".to_string(),
            user: self.user.into_dto(),
        }
    }
}

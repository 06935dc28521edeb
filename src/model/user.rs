use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: String,
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

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: String,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegisterUserDto {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub profile_image_url: Option<String>,
    pub external_uid: Option<String>,
    #[serde(default)]
    pub is_stylist: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Body of the development login stub. No field is verified.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct LoginDto {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DemoAccountDto {
    pub id: String,
    pub email: String,
    pub phone: Option<String>,
    pub name: String,
    pub photo_url: Option<String>,
    pub role: String,
    pub stylist_id: Option<String>,
    pub salon_id: Option<String>,
    pub created_at: String,
    pub last_login: String,
    pub is_verified: bool,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoginResponseDto {
    pub token: String,
    pub user: DemoAccountDto,
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServiceDto {
    pub id: String,
    pub stylist_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub duration_minutes: i32,
    pub price: f64,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StylistDto {
    pub id: String,
    pub salon_id: String,
    pub user_id: Option<String>,
    pub name: String,
    pub bio: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub years_experience: i32,
    pub profile_image_url: Option<String>,
    pub portfolio_images: Option<Vec<String>>,
    pub base_price: f64,
    pub rating: f64,
    pub review_count: i32,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub services: Vec<ServiceDto>,
}

/// Stylist with the salon fields resolved for display.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StylistDetailDto {
    #[serde(flatten)]
    pub stylist: StylistDto,
    pub salon_name: Option<String>,
    pub salon_address: Option<String>,
    /// `"city, state"` of the salon, or just the city when the salon has no state.
    pub location: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AvailabilityDto {
    pub date: NaiveDate,
    pub stylist_id: String,
    pub available_slots: Vec<String>,
}

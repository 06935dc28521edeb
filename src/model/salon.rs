use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SalonDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub booking_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub cover_image_url: Option<String>,
    pub logo_url: Option<String>,
    pub rating: f64,
    pub review_count: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedSalonsDto {
    pub salons: Vec<SalonDto>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

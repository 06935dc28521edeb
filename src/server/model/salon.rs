//! Salon domain models and query filters.

use chrono::{DateTime, Utc};

use crate::{
    model::salon::{PaginatedSalonsDto, SalonDto},
    server::model::pagination::Page,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Salon {
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

impl Salon {
    pub fn from_entity(entity: entity::salon::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            address: entity.address,
            city: entity.city,
            state: entity.state,
            zip_code: entity.zip_code,
            country: entity.country,
            phone: entity.phone,
            email: entity.email,
            website: entity.website,
            booking_url: entity.booking_url,
            latitude: entity.latitude,
            longitude: entity.longitude,
            cover_image_url: entity.cover_image_url,
            logo_url: entity.logo_url,
            rating: entity.rating,
            review_count: entity.review_count,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Human readable location, `"city, state"` or just the city.
    pub fn location(&self) -> String {
        match &self.state {
            Some(state) if !state.is_empty() => format!("{}, {}", self.city, state),
            _ => self.city.clone(),
        }
    }

    pub fn into_dto(self) -> SalonDto {
        SalonDto {
            id: self.id,
            name: self.name,
            description: self.description,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            country: self.country,
            phone: self.phone,
            email: self.email,
            website: self.website,
            booking_url: self.booking_url,
            latitude: self.latitude,
            longitude: self.longitude,
            cover_image_url: self.cover_image_url,
            logo_url: self.logo_url,
            rating: self.rating,
            review_count: self.review_count,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Optional filters for the salon listing. Both match case-insensitive substrings.
#[derive(Debug, Clone, Default)]
pub struct SalonFilter {
    pub city: Option<String>,
    /// Matched against the salon name or description.
    pub search: Option<String>,
}

impl Page<Salon> {
    pub fn into_dto(self) -> PaginatedSalonsDto {
        PaginatedSalonsDto {
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            salons: self.items.into_iter().map(Salon::into_dto).collect(),
        }
    }
}

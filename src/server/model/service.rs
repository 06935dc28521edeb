use chrono::{DateTime, Utc};

use crate::model::stylist::ServiceDto;

/// A priced, timed offering by a single stylist.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
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

impl Service {
    pub fn from_entity(entity: entity::service::Model) -> Self {
        Self {
            id: entity.id,
            stylist_id: entity.stylist_id,
            name: entity.name,
            description: entity.description,
            category: entity.category,
            duration_minutes: entity.duration_minutes,
            price: entity.price,
            image_url: entity.image_url,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ServiceDto {
        ServiceDto {
            id: self.id,
            stylist_id: self.stylist_id,
            name: self.name,
            description: self.description,
            category: self.category,
            duration_minutes: self.duration_minutes,
            price: self.price,
            image_url: self.image_url,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

//! Salon factory for creating test salon entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test salons with customizable fields.
///
/// Defaults to an active salon in "New York, NY" with a 4.5 rating.
pub struct SalonFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    description: Option<String>,
    address: String,
    city: String,
    state: Option<String>,
    rating: f64,
    is_active: bool,
}

impl<'a> SalonFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("salon-{}", id),
            name: format!("Salon {}", id),
            description: Some("Test salon description".to_string()),
            address: format!("{} Main Street", id),
            city: "New York".to_string(),
            state: Some("NY".to_string()),
            rating: 4.5,
            is_active: true,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn state(mut self, state: Option<String>) -> Self {
        self.state = state;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the salon entity into the database.
    pub async fn build(self) -> Result<entity::salon::Model, DbErr> {
        let now = Utc::now();
        entity::salon::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            address: ActiveValue::Set(self.address),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            zip_code: ActiveValue::Set(None),
            country: ActiveValue::Set("USA".to_string()),
            phone: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            website: ActiveValue::Set(None),
            booking_url: ActiveValue::Set(None),
            latitude: ActiveValue::Set(None),
            longitude: ActiveValue::Set(None),
            cover_image_url: ActiveValue::Set(None),
            logo_url: ActiveValue::Set(None),
            rating: ActiveValue::Set(self.rating),
            review_count: ActiveValue::Set(0.0),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a salon with default values.
pub async fn create_salon(db: &DatabaseConnection) -> Result<entity::salon::Model, DbErr> {
    SalonFactory::new(db).build().await
}

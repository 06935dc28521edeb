//! Service factory for creating test service entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test services with customizable fields.
///
/// Defaults to an active 60 minute "haircut" priced at 75.0.
pub struct ServiceFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    stylist_id: String,
    name: String,
    category: String,
    duration_minutes: i32,
    price: f64,
    is_active: bool,
}

impl<'a> ServiceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, stylist_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("service-{}", id),
            stylist_id: stylist_id.into(),
            name: format!("Service {}", id),
            category: "haircut".to_string(),
            duration_minutes: 60,
            price: 75.0,
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

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn duration_minutes(mut self, duration_minutes: i32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the service entity into the database.
    pub async fn build(self) -> Result<entity::service::Model, DbErr> {
        let now = Utc::now();
        entity::service::ActiveModel {
            id: ActiveValue::Set(self.id),
            stylist_id: ActiveValue::Set(self.stylist_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            category: ActiveValue::Set(self.category),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            price: ActiveValue::Set(self.price),
            image_url: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a service with default values offered by the given stylist.
pub async fn create_service(
    db: &DatabaseConnection,
    stylist_id: &str,
) -> Result<entity::service::Model, DbErr> {
    ServiceFactory::new(db, stylist_id).build().await
}

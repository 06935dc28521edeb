//! Stylist factory for creating test stylist entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stylists with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let stylist = StylistFactory::new(&db, &salon.id)
///     .name("Jane Smith")
///     .rating(4.9)
///     .specialties(vec!["Color".to_string()])
///     .build()
///     .await?;
/// ```
pub struct StylistFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    salon_id: String,
    user_id: Option<String>,
    name: String,
    specialties: Vec<String>,
    rating: f64,
    is_active: bool,
}

impl<'a> StylistFactory<'a> {
    /// Creates a new StylistFactory with default values.
    ///
    /// Defaults:
    /// - id: `"stylist-{n}"`
    /// - name: `"Stylist {n}"`
    /// - specialties: `["Haircuts"]`
    /// - rating: `4.5`, active, no linked user account
    pub fn new(db: &'a DatabaseConnection, salon_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("stylist-{}", id),
            salon_id: salon_id.into(),
            user_id: None,
            name: format!("Stylist {}", id),
            specialties: vec!["Haircuts".to_string()],
            rating: 4.5,
            is_active: true,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn specialties(mut self, specialties: Vec<String>) -> Self {
        self.specialties = specialties;
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

    /// Builds and inserts the stylist entity into the database.
    pub async fn build(self) -> Result<entity::stylist::Model, DbErr> {
        let now = Utc::now();
        entity::stylist::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(self.user_id),
            salon_id: ActiveValue::Set(self.salon_id),
            name: ActiveValue::Set(self.name),
            bio: ActiveValue::Set(None),
            specialties: ActiveValue::Set(Some(serde_json::json!(self.specialties))),
            years_experience: ActiveValue::Set(5),
            profile_image_url: ActiveValue::Set(None),
            portfolio_images: ActiveValue::Set(None),
            rating: ActiveValue::Set(self.rating),
            review_count: ActiveValue::Set(0),
            base_price: ActiveValue::Set(50.0),
            is_active: ActiveValue::Set(self.is_active),
            is_verified: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a stylist with default values working at the given salon.
pub async fn create_stylist(
    db: &DatabaseConnection,
    salon_id: &str,
) -> Result<entity::stylist::Model, DbErr> {
    StylistFactory::new(db, salon_id).build().await
}

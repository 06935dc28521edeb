//! Stylist domain models and query filters.
//!
//! A stylist (also exposed as a "pro") works at one salon and owns a set of services.
//! Specialties and portfolio images are persisted as JSON arrays and decoded here at the
//! repository boundary.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::stylist::{AvailabilityDto, StylistDetailDto, StylistDto},
    server::model::{salon::Salon, service::Service},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Stylist {
    pub id: String,
    pub user_id: Option<String>,
    pub salon_id: String,
    pub name: String,
    pub bio: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub years_experience: i32,
    pub profile_image_url: Option<String>,
    pub portfolio_images: Option<Vec<String>>,
    pub rating: f64,
    pub review_count: i32,
    pub base_price: f64,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Stylist {
    /// Converts an entity model to a stylist domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Stylist)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - A JSON list column does not hold an array of strings
    pub fn from_entity(entity: entity::stylist::Model) -> Result<Self, DbErr> {
        Ok(Self {
            specialties: decode_string_list("specialties", entity.specialties)?,
            portfolio_images: decode_string_list("portfolio_images", entity.portfolio_images)?,
            id: entity.id,
            user_id: entity.user_id,
            salon_id: entity.salon_id,
            name: entity.name,
            bio: entity.bio,
            years_experience: entity.years_experience,
            profile_image_url: entity.profile_image_url,
            rating: entity.rating,
            review_count: entity.review_count,
            base_price: entity.base_price,
            is_active: entity.is_active,
            is_verified: entity.is_verified,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self, services: Vec<Service>) -> StylistDto {
        StylistDto {
            id: self.id,
            salon_id: self.salon_id,
            user_id: self.user_id,
            name: self.name,
            bio: self.bio,
            specialties: self.specialties,
            years_experience: self.years_experience,
            profile_image_url: self.profile_image_url,
            portfolio_images: self.portfolio_images,
            base_price: self.base_price,
            rating: self.rating,
            review_count: self.review_count,
            is_active: self.is_active,
            is_verified: self.is_verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
            services: services.into_iter().map(Service::into_dto).collect(),
        }
    }
}

fn decode_string_list(
    column: &str,
    value: Option<serde_json::Value>,
) -> Result<Option<Vec<String>>, DbErr> {
    value
        .filter(|json| !json.is_null())
        .map(|json| {
            serde_json::from_value::<Vec<String>>(json)
                .map_err(|e| DbErr::Custom(format!("Failed to decode stylist {}: {}", column, e)))
        })
        .transpose()
}

/// Stylist together with the active services they offer.
#[derive(Debug, Clone, PartialEq)]
pub struct StylistProfile {
    pub stylist: Stylist,
    pub services: Vec<Service>,
}

impl StylistProfile {
    pub fn into_dto(self) -> StylistDto {
        self.stylist.into_dto(self.services)
    }
}

/// Stylist profile enriched with the salon they work at.
///
/// `salon` is `None` when the referenced salon row no longer exists.
#[derive(Debug, Clone, PartialEq)]
pub struct StylistDetail {
    pub profile: StylistProfile,
    pub salon: Option<Salon>,
}

impl StylistDetail {
    pub fn into_dto(self) -> StylistDetailDto {
        let location = self.salon.as_ref().map(Salon::location);
        let (salon_name, salon_address) = match self.salon {
            Some(salon) => (Some(salon.name), Some(salon.address)),
            None => (None, None),
        };

        StylistDetailDto {
            stylist: self.profile.into_dto(),
            salon_name,
            salon_address,
            location,
        }
    }
}

/// Optional filters for the pro listing.
#[derive(Debug, Clone, Default)]
pub struct ProFilter {
    /// Case-insensitive substring match against the city of the stylist's salon.
    pub city: Option<String>,
    /// Inclusive lower bound on the stylist rating.
    pub min_rating: Option<f64>,
}

/// Open appointment slots for a stylist on one day, as `HH:MM` start times.
#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    pub stylist_id: String,
    pub date: NaiveDate,
    pub slots: Vec<String>,
}

impl Availability {
    pub fn into_dto(self) -> AvailabilityDto {
        AvailabilityDto {
            date: self.date,
            stylist_id: self.stylist_id,
            available_slots: self.slots,
        }
    }
}

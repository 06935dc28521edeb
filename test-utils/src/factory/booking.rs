//! Booking factory for creating test booking entities.
//!
//! Bookings are inserted directly, bypassing the lifecycle rules, so tests can place a
//! booking in any status (for example `Completed`) before exercising a transition.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::booking::{BookingStatus, PaymentStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let booking = BookingFactory::new(&db, &user.id, &stylist.id, &service.id)
///     .status(BookingStatus::Completed)
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    user_id: String,
    stylist_id: String,
    service_id: String,
    scheduled_at: DateTime<Utc>,
    duration_minutes: i32,
    total_price: f64,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - id: `"booking-{n}"`
    /// - scheduled_at: one day from now
    /// - duration_minutes: `60`, total_price: `75.0`
    /// - status: `Pending`
    pub fn new(
        db: &'a DatabaseConnection,
        user_id: impl Into<String>,
        stylist_id: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("booking-{}", id),
            user_id: user_id.into(),
            stylist_id: stylist_id.into(),
            service_id: service_id.into(),
            scheduled_at: Utc::now() + Duration::days(1),
            duration_minutes: 60,
            total_price: 75.0,
            status: BookingStatus::Pending,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn scheduled_at(mut self, scheduled_at: DateTime<Utc>) -> Self {
        self.scheduled_at = scheduled_at;
        self
    }

    pub fn total_price(mut self, total_price: f64) -> Self {
        self.total_price = total_price;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        entity::booking::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(self.user_id),
            stylist_id: ActiveValue::Set(self.stylist_id),
            service_id: ActiveValue::Set(self.service_id),
            scheduled_at: ActiveValue::Set(self.scheduled_at),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            total_price: ActiveValue::Set(self.total_price),
            status: ActiveValue::Set(self.status),
            payment_status: ActiveValue::Set(PaymentStatus::Pending),
            payment_intent_id: ActiveValue::Set(None),
            customer_notes: ActiveValue::Set(None),
            stylist_notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: &str,
    stylist_id: &str,
    service_id: &str,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, stylist_id, service_id)
        .build()
        .await
}

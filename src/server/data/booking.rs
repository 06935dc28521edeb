//! Booking data repository for database operations.
//!
//! Inserts bookings with their service snapshot, pages through a customer's or a stylist's
//! bookings, applies status changes and answers the aggregate queries behind the pro
//! dashboard. Bookings are never deleted.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::{
    booking::{Booking, BookingStatus, NewBooking},
    pagination::PageRequest,
};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new booking in `pending` status with `pending` payment.
    ///
    /// # Arguments
    /// - `params` - Booking values, with duration and price already copied from the service
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: NewBooking) -> Result<Booking, DbErr> {
        let now = Utc::now();
        let entity = entity::booking::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(params.user_id),
            stylist_id: ActiveValue::Set(params.stylist_id),
            service_id: ActiveValue::Set(params.service_id),
            scheduled_at: ActiveValue::Set(params.scheduled_at),
            duration_minutes: ActiveValue::Set(params.duration_minutes),
            total_price: ActiveValue::Set(params.total_price),
            status: ActiveValue::Set(entity::booking::BookingStatus::Pending),
            payment_status: ActiveValue::Set(entity::booking::PaymentStatus::Pending),
            payment_intent_id: ActiveValue::Set(None),
            customer_notes: ActiveValue::Set(params.customer_notes),
            stylist_notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    /// Finds a booking by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking found
    /// - `Ok(None)` - No booking with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Gets one page of a customer's bookings, most recently scheduled first.
    ///
    /// # Arguments
    /// - `user_id` - Customer whose bookings to list
    /// - `status` - Only include bookings in this status when set
    /// - `page` - Page window
    ///
    /// # Returns
    /// - `Ok((bookings, total))` - Bookings on the page and the total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated_by_user(
        &self,
        user_id: &str,
        status: Option<BookingStatus>,
        page: PageRequest,
    ) -> Result<(Vec<Booking>, u64), DbErr> {
        let query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id));

        self.paginate(query, status, page).await
    }

    /// Gets one page of a stylist's bookings, most recently scheduled first.
    pub async fn get_paginated_by_stylist(
        &self,
        stylist_id: &str,
        status: Option<BookingStatus>,
        page: PageRequest,
    ) -> Result<(Vec<Booking>, u64), DbErr> {
        let query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::StylistId.eq(stylist_id));

        self.paginate(query, status, page).await
    }

    async fn paginate(
        &self,
        query: Select<entity::booking::Entity>,
        status: Option<BookingStatus>,
        page: PageRequest,
    ) -> Result<(Vec<Booking>, u64), DbErr> {
        let query = match status {
            Some(status) => {
                query.filter(entity::booking::Column::Status.eq(status.into_entity()))
            }
            None => query,
        };

        let paginator = query
            .order_by_desc(entity::booking::Column::ScheduledAt)
            .order_by_asc(entity::booking::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let bookings = paginator.fetch_page(page.index()).await?;

        Ok((
            bookings.into_iter().map(Booking::from_entity).collect(),
            total,
        ))
    }

    /// Sets the status of a booking and refreshes `updated_at`.
    ///
    /// Stylist notes are replaced only when `stylist_notes` is `Some`. No transition rules
    /// are enforced here; callers check them first.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The updated booking
    /// - `Ok(None)` - No booking with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        id: &str,
        status: BookingStatus,
        stylist_notes: Option<String>,
    ) -> Result<Option<Booking>, DbErr> {
        let Some(entity) = entity::prelude::Booking::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::booking::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status.into_entity());
        if let Some(notes) = stylist_notes {
            active.stylist_notes = ActiveValue::Set(Some(notes));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Booking::from_entity(updated)))
    }

    /// Gets a stylist's bookings scheduled in `[start, end)`, excluding cancelled ones,
    /// most recently scheduled first.
    pub async fn get_active_by_stylist_between(
        &self,
        stylist_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Booking>, DbErr> {
        let query = Self::active_for_stylist(stylist_id)
            .filter(entity::booking::Column::ScheduledAt.gte(start))
            .filter(entity::booking::Column::ScheduledAt.lt(end));

        self.all_recent_first(query).await
    }

    /// Gets every non-cancelled booking of a stylist, most recently scheduled first.
    pub async fn get_active_by_stylist(&self, stylist_id: &str) -> Result<Vec<Booking>, DbErr> {
        self.all_recent_first(Self::active_for_stylist(stylist_id))
            .await
    }

    /// Gets the non-cancelled bookings one customer made with a stylist, most recently
    /// scheduled first.
    pub async fn get_active_by_stylist_and_user(
        &self,
        stylist_id: &str,
        user_id: &str,
    ) -> Result<Vec<Booking>, DbErr> {
        let query = Self::active_for_stylist(stylist_id)
            .filter(entity::booking::Column::UserId.eq(user_id));

        self.all_recent_first(query).await
    }

    fn active_for_stylist(stylist_id: &str) -> Select<entity::booking::Entity> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::StylistId.eq(stylist_id))
            .filter(
                entity::booking::Column::Status.ne(entity::booking::BookingStatus::Cancelled),
            )
    }

    async fn all_recent_first(
        &self,
        query: Select<entity::booking::Entity>,
    ) -> Result<Vec<Booking>, DbErr> {
        let entities = query
            .order_by_desc(entity::booking::Column::ScheduledAt)
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Counts the distinct customers that have booked a stylist.
    pub async fn count_distinct_customers(&self, stylist_id: &str) -> Result<u64, DbErr> {
        let customers = entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::UserId)
            .distinct()
            .filter(entity::booking::Column::StylistId.eq(stylist_id))
            .into_tuple::<String>()
            .all(self.db)
            .await?;

        Ok(customers.len() as u64)
    }
}

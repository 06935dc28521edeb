//! Booking lifecycle.
//!
//! Creates bookings with a snapshot of the service's duration and price, lists and reads
//! them for their owner and cancels them. Every read is enriched with the stylist, service
//! and salon names, loaded in one query per table for the whole page.

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        booking::BookingRepository, salon::SalonRepository, service::ServiceRepository,
        stylist::StylistRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        booking::{Booking, BookingDetail, BookingStatus, CreateBookingParams, NewBooking},
        pagination::{Page, PageRequest},
        user::User,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending booking for `params.user_id`.
    ///
    /// The service is looked up before the stylist. Nothing is written when either is
    /// missing. Overlapping bookings for the same stylist are not detected.
    ///
    /// # Returns
    /// - `Ok(BookingDetail)` - Created booking with display names
    /// - `Err(AppError::NotFound)` - Unknown service or stylist
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, params: CreateBookingParams) -> Result<BookingDetail, AppError> {
        let Some(service) = ServiceRepository::new(self.db)
            .find_by_id(&params.service_id)
            .await?
        else {
            return Err(AppError::NotFound("Service not found".to_string()));
        };

        let Some(stylist) = StylistRepository::new(self.db)
            .find_by_id(&params.stylist_id)
            .await?
        else {
            return Err(AppError::NotFound("Stylist not found".to_string()));
        };

        let booking = BookingRepository::new(self.db)
            .create(NewBooking {
                user_id: params.user_id,
                stylist_id: stylist.id,
                service_id: service.id,
                scheduled_at: params.scheduled_at,
                duration_minutes: service.duration_minutes,
                total_price: service.price,
                customer_notes: params.customer_notes,
            })
            .await?;

        tracing::info!(
            "Booking {} created for user {} with stylist {}",
            booking.id,
            booking.user_id,
            booking.stylist_id
        );

        self.enrich_one(booking).await
    }

    /// Gets one page of a customer's bookings, most recently scheduled first.
    ///
    /// # Arguments
    /// - `user_id` - Customer whose bookings are listed
    /// - `requester` - Authenticated user; must be the same customer
    /// - `status` - Optional status filter
    /// - `page` - Page window
    ///
    /// # Returns
    /// - `Ok(Page<BookingDetail>)` - Page of enriched bookings
    /// - `Err(AppError::AuthErr)` - Requester is not `user_id`
    pub async fn get_paginated_for_user(
        &self,
        user_id: &str,
        requester: &User,
        status: Option<BookingStatus>,
        page: PageRequest,
    ) -> Result<Page<BookingDetail>, AppError> {
        if requester.id != user_id {
            return Err(AuthError::AccessDenied(
                requester.id.clone(),
                format!("Attempted to list bookings of user {}", user_id),
            )
            .into());
        }

        let (bookings, total) = BookingRepository::new(self.db)
            .get_paginated_by_user(user_id, status, page)
            .await?;

        let details = enrich(self.db, bookings).await?;

        Ok(Page::new(details, total, page))
    }

    /// Gets a single booking owned by `requester`.
    ///
    /// # Returns
    /// - `Ok(BookingDetail)` - Booking with display names
    /// - `Err(AppError::NotFound)` - Unknown booking
    /// - `Err(AppError::AuthErr)` - Booking belongs to another user
    pub async fn get_by_id(
        &self,
        booking_id: &str,
        requester: &User,
    ) -> Result<BookingDetail, AppError> {
        let booking = self.find_owned(booking_id, requester).await?;

        self.enrich_one(booking).await
    }

    /// Cancels a booking owned by `requester`.
    ///
    /// Cancelling an already cancelled booking succeeds again without other effects than
    /// refreshing `updated_at`. Completed bookings cannot be cancelled.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Cancelled booking
    /// - `Err(AppError::NotFound)` - Unknown booking
    /// - `Err(AppError::AuthErr)` - Booking belongs to another user
    /// - `Err(AppError::BadRequest)` - Booking is completed
    pub async fn cancel(&self, booking_id: &str, requester: &User) -> Result<Booking, AppError> {
        let booking = self.find_owned(booking_id, requester).await?;

        if booking.status == BookingStatus::Completed {
            return Err(AppError::BadRequest(
                "Cannot cancel a completed booking".to_string(),
            ));
        }

        let cancelled = BookingRepository::new(self.db)
            .update_status(&booking.id, BookingStatus::Cancelled, None)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        tracing::info!(
            "Booking {} cancelled by user {}",
            cancelled.id,
            requester.id
        );

        Ok(cancelled)
    }

    async fn find_owned(&self, booking_id: &str, requester: &User) -> Result<Booking, AppError> {
        let Some(booking) = BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
        else {
            return Err(AppError::NotFound("Booking not found".to_string()));
        };

        if booking.user_id != requester.id {
            return Err(AuthError::AccessDenied(
                requester.id.clone(),
                format!("Attempted to access booking {} of another user", booking.id),
            )
            .into());
        }

        Ok(booking)
    }

    async fn enrich_one(&self, booking: Booking) -> Result<BookingDetail, AppError> {
        enrich(self.db, vec![booking])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError("Booking lost during enrichment".to_string()))
    }
}

/// Resolves stylist, service and salon names for a batch of bookings.
///
/// Issues at most one query per table regardless of the batch size. Names of rows that no
/// longer exist are left as `None`.
async fn enrich(
    db: &DatabaseConnection,
    bookings: Vec<Booking>,
) -> Result<Vec<BookingDetail>, AppError> {
    if bookings.is_empty() {
        return Ok(Vec::new());
    }

    let stylist_ids = unique(bookings.iter().map(|b| &b.stylist_id));
    let service_ids = unique(bookings.iter().map(|b| &b.service_id));

    let stylists: HashMap<String, (String, String)> = StylistRepository::new(db)
        .find_many_by_ids(stylist_ids)
        .await?
        .into_iter()
        .map(|s| (s.id, (s.name, s.salon_id)))
        .collect();

    let services: HashMap<String, String> = ServiceRepository::new(db)
        .find_many_by_ids(service_ids)
        .await?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();

    let salon_ids = unique(stylists.values().map(|(_, salon_id)| salon_id));
    let salons: HashMap<String, String> = SalonRepository::new(db)
        .find_many_by_ids(salon_ids)
        .await?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();

    Ok(bookings
        .into_iter()
        .map(|booking| {
            let stylist = stylists.get(&booking.stylist_id);
            BookingDetail {
                stylist_name: stylist.map(|(name, _)| name.clone()),
                salon_name: stylist.and_then(|(_, salon_id)| salons.get(salon_id).cloned()),
                service_name: services.get(&booking.service_id).cloned(),
                booking,
            }
        })
        .collect())
}

fn unique<'s>(ids: impl Iterator<Item = &'s String>) -> Vec<String> {
    ids.cloned()
        .collect::<HashSet<_>>()
        .into_iter()
        .collect()
}

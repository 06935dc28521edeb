//! Pro dashboard: a stylist's view of their own bookings, clients and earnings.
//!
//! Every operation starts from the stylist profile linked to the requesting user. Users
//! without a stylist profile are denied.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, NaiveTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        booking::BookingRepository, service::ServiceRepository, stylist::StylistRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        booking::{Booking, BookingStatus},
        pagination::{Page, PageRequest},
        pro::{
            ClientDetail, ClientSummary, Customer, DashboardStats, Earnings, EarningsPeriod,
            ProBooking,
        },
        stylist::Stylist,
        user::User,
    },
};

pub struct ProDashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProDashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes today's and this week's booking figures for the requester's stylist profile.
    ///
    /// Days are UTC calendar days; the week is the last seven days including today.
    /// Cancelled bookings are not counted.
    pub async fn get_stats(&self, requester: &User) -> Result<DashboardStats, AppError> {
        let stylist = self.require_stylist(requester).await?;
        let booking_repo = BookingRepository::new(self.db);

        let (day_start, day_end) = day_window(Utc::now());
        let week_start = day_start - Duration::days(6);

        let today = booking_repo
            .get_active_by_stylist_between(&stylist.id, day_start, day_end)
            .await?;
        let week = booking_repo
            .get_active_by_stylist_between(&stylist.id, week_start, day_end)
            .await?;
        let total_clients = booking_repo.count_distinct_customers(&stylist.id).await?;

        Ok(DashboardStats {
            today_bookings: today.len() as u64,
            today_earnings: today.iter().map(|b| b.total_price).sum(),
            this_week_bookings: week.len() as u64,
            total_clients,
            rating: stylist.rating,
        })
    }

    /// Gets one page of the requester's stylist bookings, most recently scheduled first.
    pub async fn get_bookings(
        &self,
        requester: &User,
        status: Option<BookingStatus>,
        page: PageRequest,
    ) -> Result<Page<ProBooking>, AppError> {
        let stylist = self.require_stylist(requester).await?;

        let (bookings, total) = BookingRepository::new(self.db)
            .get_paginated_by_stylist(&stylist.id, status, page)
            .await?;

        let items = self.enrich(bookings).await?;

        Ok(Page::new(items, total, page))
    }

    /// Moves one of the requester's stylist bookings to `status`.
    ///
    /// # Returns
    /// - `Ok(ProBooking)` - Updated booking
    /// - `Err(AppError::NotFound)` - Unknown booking
    /// - `Err(AppError::AuthErr)` - Requester has no stylist profile or the booking is
    ///   for another stylist
    /// - `Err(AppError::InvalidState)` - Transition not allowed from the current status
    pub async fn update_booking_status(
        &self,
        requester: &User,
        booking_id: &str,
        status: BookingStatus,
        stylist_notes: Option<String>,
    ) -> Result<ProBooking, AppError> {
        let stylist = self.require_stylist(requester).await?;
        let booking_repo = BookingRepository::new(self.db);

        let Some(booking) = booking_repo.find_by_id(booking_id).await? else {
            return Err(AppError::NotFound("Booking not found".to_string()));
        };

        if booking.stylist_id != stylist.id {
            return Err(AuthError::AccessDenied(
                requester.id.clone(),
                format!(
                    "Stylist {} attempted to update booking {} of stylist {}",
                    stylist.id, booking.id, booking.stylist_id
                ),
            )
            .into());
        }

        if !booking.status.can_transition_to(status) {
            return Err(AppError::InvalidState(format!(
                "Cannot change booking status from {} to {}",
                booking.status, status
            )));
        }

        let updated = booking_repo
            .update_status(&booking.id, status, stylist_notes)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        tracing::info!(
            "Booking {} moved from {} to {} by stylist {}",
            updated.id,
            booking.status,
            updated.status,
            stylist.id
        );

        self.enrich(vec![updated])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError("Booking lost during enrichment".to_string()))
    }

    /// Lists the requester's clients, most recent visit first.
    ///
    /// A client is any customer with at least one non-cancelled booking with the stylist;
    /// visits and spending are totalled over those bookings.
    pub async fn get_clients(&self, requester: &User) -> Result<Vec<ClientSummary>, AppError> {
        let stylist = self.require_stylist(requester).await?;

        let bookings = BookingRepository::new(self.db)
            .get_active_by_stylist(&stylist.id)
            .await?;

        let mut by_customer: HashMap<&str, Vec<&Booking>> = HashMap::new();
        for booking in &bookings {
            by_customer
                .entry(booking.user_id.as_str())
                .or_default()
                .push(booking);
        }

        let customers = self
            .load_customers(by_customer.keys().map(|id| id.to_string()).collect())
            .await?;

        let mut clients: Vec<ClientSummary> = by_customer
            .into_iter()
            .filter_map(|(customer_id, visits)| {
                let customer = customers.get(customer_id).cloned().unwrap_or_default();
                ClientSummary::from_bookings(customer_id.to_string(), customer, visits)
            })
            .collect();

        clients.sort_by(|a, b| {
            b.last_visit
                .cmp(&a.last_visit)
                .then_with(|| a.customer_id.cmp(&b.customer_id))
        });

        Ok(clients)
    }

    /// Gets one client of the requester with their visit history.
    ///
    /// # Returns
    /// - `Ok(ClientDetail)` - Client totals and visits, most recent first
    /// - `Err(AppError::NotFound)` - No non-cancelled booking of `client_id` with the stylist
    /// - `Err(AppError::AuthErr)` - Requester has no stylist profile
    pub async fn get_client(
        &self,
        requester: &User,
        client_id: &str,
    ) -> Result<ClientDetail, AppError> {
        let stylist = self.require_stylist(requester).await?;

        let bookings = BookingRepository::new(self.db)
            .get_active_by_stylist_and_user(&stylist.id, client_id)
            .await?;

        if bookings.is_empty() {
            return Err(AppError::NotFound("Client not found".to_string()));
        }

        let customer = self
            .load_customers(HashSet::from([client_id.to_string()]))
            .await?
            .remove(client_id)
            .unwrap_or_default();

        let summary = ClientSummary::from_bookings(client_id.to_string(), customer, &bookings)
            .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;

        let history = self.enrich(bookings).await?;

        Ok(ClientDetail { summary, history })
    }

    /// Sums the requester's non-cancelled bookings scheduled within `period`.
    ///
    /// The window ends with the current UTC day and reaches back `period.days()` days,
    /// today included.
    pub async fn get_earnings(
        &self,
        requester: &User,
        period: EarningsPeriod,
    ) -> Result<Earnings, AppError> {
        let stylist = self.require_stylist(requester).await?;

        let (_, day_end) = day_window(Utc::now());
        let start = day_end - Duration::days(period.days());

        let bookings = BookingRepository::new(self.db)
            .get_active_by_stylist_between(&stylist.id, start, day_end)
            .await?;

        let total_earnings: f64 = bookings.iter().map(|b| b.total_price).sum();
        let transactions = self.enrich(bookings).await?;

        Ok(Earnings {
            period,
            total_earnings,
            transactions,
        })
    }

    async fn require_stylist(&self, requester: &User) -> Result<Stylist, AppError> {
        StylistRepository::new(self.db)
            .find_by_user_id(&requester.id)
            .await?
            .ok_or_else(|| {
                AuthError::AccessDenied(
                    requester.id.clone(),
                    "User has no stylist profile".to_string(),
                )
                .into()
            })
    }

    async fn enrich(&self, bookings: Vec<Booking>) -> Result<Vec<ProBooking>, AppError> {
        if bookings.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids: HashSet<String> = bookings.iter().map(|b| b.user_id.clone()).collect();
        let service_ids: HashSet<String> =
            bookings.iter().map(|b| b.service_id.clone()).collect();

        let customers = self.load_customers(user_ids).await?;

        let services: HashMap<String, String> = ServiceRepository::new(self.db)
            .find_many_by_ids(service_ids.into_iter().collect())
            .await?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        Ok(bookings
            .into_iter()
            .map(|booking| ProBooking {
                customer: customers.get(&booking.user_id).cloned().unwrap_or_default(),
                service_name: services.get(&booking.service_id).cloned(),
                booking,
            })
            .collect())
    }

    async fn load_customers(
        &self,
        user_ids: HashSet<String>,
    ) -> Result<HashMap<String, Customer>, AppError> {
        Ok(UserRepository::new(self.db)
            .find_many_by_ids(user_ids.into_iter().collect())
            .await?
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    Customer {
                        name: Some(u.name),
                        email: Some(u.email),
                        phone: u.phone,
                    },
                )
            })
            .collect())
    }
}

/// UTC calendar day containing `now`, as `[start, end)`.
fn day_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = now.date_naive().and_time(NaiveTime::MIN).and_utc();

    (start, start + Duration::days(1))
}

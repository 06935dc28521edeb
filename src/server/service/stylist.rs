//! Stylist (pro) discovery.
//!
//! Stylists are exposed under two names: `/stylists` and `/pros`. Both read through this
//! service; the controllers differ only in their not-found messages.

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{salon::SalonRepository, service::ServiceRepository, stylist::StylistRepository},
    error::AppError,
    model::{
        pagination::PageRequest,
        service::Service,
        stylist::{Availability, ProFilter, Stylist, StylistDetail, StylistProfile},
    },
};

/// Slot start times offered on every day, with a gap for lunch.
const MORNING_SLOTS: [&str; 6] = ["09:00", "09:30", "10:00", "10:30", "11:00", "11:30"];
const AFTERNOON_SLOTS: [&str; 8] = [
    "13:00", "13:30", "14:00", "14:30", "15:00", "15:30", "16:00", "16:30",
];

pub struct StylistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StylistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a stylist with their active services and salon.
    ///
    /// # Returns
    /// - `Ok(Some(StylistDetail))` - Stylist found; `salon` is `None` if the salon row is gone
    /// - `Ok(None)` - No stylist with that ID
    /// - `Err(AppError)` - Database error
    pub async fn get_detail(&self, stylist_id: &str) -> Result<Option<StylistDetail>, AppError> {
        let Some(stylist) = StylistRepository::new(self.db)
            .find_by_id(stylist_id)
            .await?
        else {
            return Ok(None);
        };

        let services = ServiceRepository::new(self.db)
            .get_active_by_stylist(&stylist.id)
            .await?;
        let salon = SalonRepository::new(self.db)
            .find_by_id(&stylist.salon_id)
            .await?;

        Ok(Some(StylistDetail {
            profile: StylistProfile { stylist, services },
            salon,
        }))
    }

    /// Gets the active services of a stylist, ordered by name.
    ///
    /// # Returns
    /// - `Ok(Some(services))` - Stylist exists
    /// - `Ok(None)` - No stylist with that ID
    pub async fn get_services(&self, stylist_id: &str) -> Result<Option<Vec<Service>>, AppError> {
        if StylistRepository::new(self.db)
            .find_by_id(stylist_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let services = ServiceRepository::new(self.db)
            .get_active_by_stylist(stylist_id)
            .await?;

        Ok(Some(services))
    }

    /// Gets the bookable slots of a stylist for a `YYYY-MM-DD` date.
    ///
    /// Slots are a fixed daily schedule and do not account for existing bookings.
    ///
    /// # Returns
    /// - `Ok(Some(Availability))` - Stylist exists
    /// - `Ok(None)` - No stylist with that ID
    /// - `Err(AppError::BadRequest)` - Date is not `YYYY-MM-DD`
    pub async fn get_availability(
        &self,
        stylist_id: &str,
        date: &str,
    ) -> Result<Option<Availability>, AppError> {
        let date = parse_date(date)?;

        if StylistRepository::new(self.db)
            .find_by_id(stylist_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        Ok(Some(Availability {
            stylist_id: stylist_id.to_string(),
            date,
            slots: daily_slots(),
        }))
    }

    /// Gets one page of active stylists matching `filter`, each with their active services.
    pub async fn list_pros(
        &self,
        filter: &ProFilter,
        page: PageRequest,
    ) -> Result<Vec<StylistProfile>, AppError> {
        let (stylists, _total) = StylistRepository::new(self.db)
            .get_pros_paginated(filter, page)
            .await?;

        with_services(self.db, stylists).await
    }
}

/// Attaches active services to each stylist, loading all of them in one query.
pub(crate) async fn with_services(
    db: &DatabaseConnection,
    stylists: Vec<Stylist>,
) -> Result<Vec<StylistProfile>, AppError> {
    let ids = stylists.iter().map(|s| s.id.clone()).collect();
    let services = ServiceRepository::new(db)
        .get_active_by_stylists(ids)
        .await?;

    let mut by_stylist: HashMap<String, Vec<Service>> = HashMap::new();
    for service in services {
        by_stylist
            .entry(service.stylist_id.clone())
            .or_default()
            .push(service);
    }

    Ok(stylists
        .into_iter()
        .map(|stylist| StylistProfile {
            services: by_stylist.remove(&stylist.id).unwrap_or_default(),
            stylist,
        })
        .collect())
}

fn parse_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("Invalid date format. Use YYYY-MM-DD".to_string()))
}

fn daily_slots() -> Vec<String> {
    MORNING_SLOTS
        .iter()
        .chain(AFTERNOON_SLOTS.iter())
        .map(|slot| slot.to_string())
        .collect()
}

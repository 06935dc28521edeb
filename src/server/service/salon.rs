use sea_orm::DatabaseConnection;

use crate::server::{
    data::{salon::SalonRepository, stylist::StylistRepository},
    error::AppError,
    model::{
        pagination::{Page, PageRequest},
        salon::{Salon, SalonFilter},
        stylist::StylistProfile,
    },
    service::stylist::with_services,
};

pub struct SalonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SalonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of active salons, best rated first.
    pub async fn get_paginated(
        &self,
        filter: &SalonFilter,
        page: PageRequest,
    ) -> Result<Page<Salon>, AppError> {
        let (salons, total) = SalonRepository::new(self.db)
            .get_paginated(filter, page)
            .await?;

        Ok(Page::new(salons, total, page))
    }

    pub async fn get_by_id(&self, salon_id: &str) -> Result<Option<Salon>, AppError> {
        Ok(SalonRepository::new(self.db).find_by_id(salon_id).await?)
    }

    /// Gets the active stylists working at a salon, each with their active services.
    ///
    /// # Returns
    /// - `Ok(Some(stylists))` - Salon exists
    /// - `Ok(None)` - No salon with that ID
    /// - `Err(AppError)` - Database error
    pub async fn get_stylists(
        &self,
        salon_id: &str,
    ) -> Result<Option<Vec<StylistProfile>>, AppError> {
        if SalonRepository::new(self.db)
            .find_by_id(salon_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let stylists = StylistRepository::new(self.db)
            .get_active_by_salon(salon_id)
            .await?;

        Ok(Some(with_services(self.db, stylists).await?))
    }
}

//! Stylist data repository.
//!
//! Provides the stylist lookups used by discovery (salon rosters, the pro listing and
//! detail pages), booking creation, and the pro dashboard's stylist-by-account lookup.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::salon::SalonRepository,
    model::{
        pagination::PageRequest,
        stylist::{ProFilter, Stylist},
    },
};

pub struct StylistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StylistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a stylist by ID regardless of whether they are active.
    ///
    /// # Returns
    /// - `Ok(Some(Stylist))` - Stylist found
    /// - `Ok(None)` - No stylist with that ID
    /// - `Err(DbErr)` - Database error or undecodable JSON column
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Stylist>, DbErr> {
        entity::prelude::Stylist::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Stylist::from_entity)
            .transpose()
    }

    /// Finds the stylist profile linked to a user account.
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Stylist>, DbErr> {
        entity::prelude::Stylist::find()
            .filter(entity::stylist::Column::UserId.eq(user_id))
            .order_by_asc(entity::stylist::Column::Id)
            .one(self.db)
            .await?
            .map(Stylist::from_entity)
            .transpose()
    }

    /// Gets the active stylists of a salon, best rated first.
    pub async fn get_active_by_salon(&self, salon_id: &str) -> Result<Vec<Stylist>, DbErr> {
        entity::prelude::Stylist::find()
            .filter(entity::stylist::Column::SalonId.eq(salon_id))
            .filter(entity::stylist::Column::IsActive.eq(true))
            .order_by_desc(entity::stylist::Column::Rating)
            .order_by_asc(entity::stylist::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Stylist::from_entity)
            .collect()
    }

    /// Gets one page of active stylists for the pro listing.
    ///
    /// The city filter is resolved to the set of matching salon IDs first, then applied
    /// to `salon_id`. `min_rating` is inclusive.
    ///
    /// # Returns
    /// - `Ok((stylists, total))` - Stylists on the requested page and the total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_pros_paginated(
        &self,
        filter: &ProFilter,
        page: PageRequest,
    ) -> Result<(Vec<Stylist>, u64), DbErr> {
        let mut query = entity::prelude::Stylist::find()
            .filter(entity::stylist::Column::IsActive.eq(true));

        if let Some(city) = filter.city.as_deref() {
            let salon_ids = SalonRepository::new(self.db).find_ids_by_city(city).await?;
            query = query.filter(entity::stylist::Column::SalonId.is_in(salon_ids));
        }

        if let Some(min_rating) = filter.min_rating {
            query = query.filter(entity::stylist::Column::Rating.gte(min_rating));
        }

        let paginator = query
            .order_by_desc(entity::stylist::Column::Rating)
            .order_by_asc(entity::stylist::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let stylists = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(Stylist::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((stylists, total))
    }

    /// Fetches every stylist whose ID is in `ids` with a single query.
    pub async fn find_many_by_ids(&self, ids: Vec<String>) -> Result<Vec<Stylist>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Stylist::find()
            .filter(entity::stylist::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(Stylist::from_entity)
            .collect()
    }
}

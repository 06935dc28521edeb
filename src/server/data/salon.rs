//! Salon data repository for discovery queries.

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{
    data::contains_ignore_case,
    model::{
        pagination::PageRequest,
        salon::{Salon, SalonFilter},
    },
};

pub struct SalonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SalonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of active salons matching `filter`.
    ///
    /// Ordered by rating descending, then by ID so pages are stable between requests.
    ///
    /// # Returns
    /// - `Ok((salons, total))` - Salons on the requested page and the total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &SalonFilter,
        page: PageRequest,
    ) -> Result<(Vec<Salon>, u64), DbErr> {
        let mut condition = Condition::all().add(entity::salon::Column::IsActive.eq(true));

        if let Some(city) = filter.city.as_deref() {
            condition = condition.add(contains_ignore_case(entity::salon::Column::City, city));
        }

        if let Some(search) = filter.search.as_deref() {
            condition = condition.add(
                Condition::any()
                    .add(contains_ignore_case(entity::salon::Column::Name, search))
                    .add(contains_ignore_case(
                        entity::salon::Column::Description,
                        search,
                    )),
            );
        }

        let paginator = entity::prelude::Salon::find()
            .filter(condition)
            .order_by_desc(entity::salon::Column::Rating)
            .order_by_asc(entity::salon::Column::Id)
            .paginate(self.db, page.page_size);

        let total = paginator.num_items().await?;
        let salons = paginator.fetch_page(page.index()).await?;

        Ok((salons.into_iter().map(Salon::from_entity).collect(), total))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Salon>, DbErr> {
        let entity = entity::prelude::Salon::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Salon::from_entity))
    }

    /// Fetches every salon whose ID is in `ids` with a single query.
    pub async fn find_many_by_ids(&self, ids: Vec<String>) -> Result<Vec<Salon>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Salon::find()
            .filter(entity::salon::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Salon::from_entity).collect())
    }

    /// Returns IDs of salons whose city contains `city`, ignoring case. Inactive salons are
    /// included; the caller filters on stylist activity.
    pub async fn find_ids_by_city(&self, city: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::Salon::find()
            .select_only()
            .column(entity::salon::Column::Id)
            .filter(contains_ignore_case(entity::salon::Column::City, city))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}

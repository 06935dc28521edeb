use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::service::Service;

pub struct ServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a service by ID regardless of whether it is active.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Service>, DbErr> {
        let entity = entity::prelude::Service::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Service::from_entity))
    }

    /// Gets the active services of a stylist ordered by name.
    pub async fn get_active_by_stylist(&self, stylist_id: &str) -> Result<Vec<Service>, DbErr> {
        self.get_active_by_stylists(vec![stylist_id.to_string()])
            .await
    }

    /// Gets the active services of several stylists with a single query, ordered by name.
    pub async fn get_active_by_stylists(
        &self,
        stylist_ids: Vec<String>,
    ) -> Result<Vec<Service>, DbErr> {
        if stylist_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Service::find()
            .filter(entity::service::Column::StylistId.is_in(stylist_ids))
            .filter(entity::service::Column::IsActive.eq(true))
            .order_by_asc(entity::service::Column::Name)
            .order_by_asc(entity::service::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Service::from_entity).collect())
    }

    /// Fetches every service whose ID is in `ids` with a single query.
    pub async fn find_many_by_ids(&self, ids: Vec<String>) -> Result<Vec<Service>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Service::find()
            .filter(entity::service::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Service::from_entity).collect())
    }
}

pub use sea_orm_migration::prelude::*;

mod m20251015_000001_create_user_table;
mod m20251015_000002_create_salon_table;
mod m20251015_000003_create_stylist_table;
mod m20251015_000004_create_service_table;
mod m20251015_000005_create_booking_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251015_000001_create_user_table::Migration),
            Box::new(m20251015_000002_create_salon_table::Migration),
            Box::new(m20251015_000003_create_stylist_table::Migration),
            Box::new(m20251015_000004_create_service_table::Migration),
            Box::new(m20251015_000005_create_booking_table::Migration),
        ]
    }
}

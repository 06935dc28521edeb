use sea_orm_migration::{prelude::*, schema::*};

use super::m20251015_000003_create_stylist_table::Stylist;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(string(Service::Id).primary_key())
                    .col(string(Service::StylistId))
                    .col(string(Service::Name))
                    .col(text_null(Service::Description))
                    .col(string(Service::Category))
                    .col(integer(Service::DurationMinutes))
                    .col(double(Service::Price))
                    .col(string_null(Service::ImageUrl))
                    .col(boolean(Service::IsActive).default(true))
                    .col(timestamp_with_time_zone(Service::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Service::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_stylist_id")
                            .from(Service::Table, Service::StylistId)
                            .to(Stylist::Table, Stylist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Service::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Service {
    #[sea_orm(iden = "services")]
    Table,
    Id,
    StylistId,
    Name,
    Description,
    Category,
    DurationMinutes,
    Price,
    ImageUrl,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251015_000001_create_user_table::User, m20251015_000002_create_salon_table::Salon};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stylist::Table)
                    .if_not_exists()
                    .col(string(Stylist::Id).primary_key())
                    .col(string_null(Stylist::UserId))
                    .col(string(Stylist::SalonId))
                    .col(string(Stylist::Name))
                    .col(text_null(Stylist::Bio))
                    .col(json_null(Stylist::Specialties))
                    .col(integer(Stylist::YearsExperience).default(0))
                    .col(string_null(Stylist::ProfileImageUrl))
                    .col(json_null(Stylist::PortfolioImages))
                    .col(double(Stylist::Rating).default(0.0))
                    .col(integer(Stylist::ReviewCount).default(0))
                    .col(double(Stylist::BasePrice).default(0.0))
                    .col(boolean(Stylist::IsActive).default(true))
                    .col(boolean(Stylist::IsVerified).default(false))
                    .col(timestamp_with_time_zone(Stylist::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Stylist::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stylist_salon_id")
                            .from(Stylist::Table, Stylist::SalonId)
                            .to(Salon::Table, Salon::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stylist_user_id")
                            .from(Stylist::Table, Stylist::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stylist_salon_id")
                    .table(Stylist::Table)
                    .col(Stylist::SalonId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stylist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Stylist {
    #[sea_orm(iden = "stylists")]
    Table,
    Id,
    UserId,
    SalonId,
    Name,
    Bio,
    Specialties,
    YearsExperience,
    ProfileImageUrl,
    PortfolioImages,
    Rating,
    ReviewCount,
    BasePrice,
    IsActive,
    IsVerified,
    CreatedAt,
    UpdatedAt,
}

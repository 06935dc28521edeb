use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Salon::Table)
                    .if_not_exists()
                    .col(string(Salon::Id).primary_key())
                    .col(string(Salon::Name))
                    .col(text_null(Salon::Description))
                    .col(string(Salon::Address))
                    .col(string(Salon::City))
                    .col(string_null(Salon::State))
                    .col(string_null(Salon::ZipCode))
                    .col(string(Salon::Country).default("USA"))
                    .col(string_null(Salon::Phone))
                    .col(string_null(Salon::Email))
                    .col(string_null(Salon::Website))
                    .col(string_null(Salon::BookingUrl))
                    .col(double_null(Salon::Latitude))
                    .col(double_null(Salon::Longitude))
                    .col(string_null(Salon::CoverImageUrl))
                    .col(string_null(Salon::LogoUrl))
                    .col(double(Salon::Rating).default(0.0))
                    .col(double(Salon::ReviewCount).default(0.0))
                    .col(boolean(Salon::IsActive).default(true))
                    .col(timestamp_with_time_zone(Salon::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Salon::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Salon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Salon {
    #[sea_orm(iden = "salons")]
    Table,
    Id,
    Name,
    Description,
    Address,
    City,
    State,
    ZipCode,
    Country,
    Phone,
    Email,
    Website,
    BookingUrl,
    Latitude,
    Longitude,
    CoverImageUrl,
    LogoUrl,
    Rating,
    ReviewCount,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251015_000001_create_user_table::User, m20251015_000003_create_stylist_table::Stylist,
    m20251015_000004_create_service_table::Service,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(string(Booking::Id).primary_key())
                    .col(string(Booking::UserId))
                    .col(string(Booking::StylistId))
                    .col(string(Booking::ServiceId))
                    .col(timestamp_with_time_zone(Booking::ScheduledAt))
                    .col(integer(Booking::DurationMinutes))
                    .col(double(Booking::TotalPrice))
                    .col(string(Booking::Status).default("pending"))
                    .col(string(Booking::PaymentStatus).default("pending"))
                    .col(string_null(Booking::PaymentIntentId))
                    .col(text_null(Booking::CustomerNotes))
                    .col(text_null(Booking::StylistNotes))
                    .col(timestamp_with_time_zone(Booking::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Booking::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_stylist_id")
                            .from(Booking::Table, Booking::StylistId)
                            .to(Stylist::Table, Stylist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_service_id")
                            .from(Booking::Table, Booking::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_user_scheduled_at")
                    .table(Booking::Table)
                    .col(Booking::UserId)
                    .col(Booking::ScheduledAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_stylist_scheduled_at")
                    .table(Booking::Table)
                    .col(Booking::StylistId)
                    .col(Booking::ScheduledAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    #[sea_orm(iden = "bookings")]
    Table,
    Id,
    UserId,
    StylistId,
    ServiceId,
    ScheduledAt,
    DurationMinutes,
    TotalPrice,
    Status,
    PaymentStatus,
    PaymentIntentId,
    CustomerNotes,
    StylistNotes,
    CreatedAt,
    UpdatedAt,
}

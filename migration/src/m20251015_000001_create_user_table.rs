use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::Id).primary_key())
                    .col(string_null(User::ExternalUid).unique_key())
                    .col(string_uniq(User::Email))
                    .col(string(User::Name))
                    .col(string_null(User::Phone))
                    .col(string_null(User::ProfileImageUrl))
                    .col(boolean(User::IsStylist).default(false))
                    .col(boolean(User::IsAdmin).default(false))
                    .col(timestamp_with_time_zone(User::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(User::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    ExternalUid,
    Email,
    Name,
    Phone,
    ProfileImageUrl,
    IsStylist,
    IsAdmin,
    CreatedAt,
    UpdatedAt,
}

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        booking::BookingStatus, pagination::PageRequest, pro::EarningsPeriod, user::User,
    },
    service::pro_dashboard::ProDashboardService,
};
use chrono::{Duration, Utc};
use entity::booking::BookingStatus as StoredStatus;
use sea_orm::DatabaseConnection;
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, stylist::StylistFactory, user::UserFactory},
};

mod get_bookings;
mod get_earnings;
mod get_stats;

/// Stylist with a linked user account plus one of their services.
struct ProSetup {
    pro: User,
    stylist: entity::stylist::Model,
    service: entity::service::Model,
}

async fn setup_pro(db: &DatabaseConnection) -> Result<ProSetup, AppError> {
    let account = UserFactory::new(db).stylist(true).build().await?;
    let salon = factory::create_salon(db).await?;
    let stylist = StylistFactory::new(db, &salon.id)
        .user_id(&account.id)
        .rating(4.8)
        .build()
        .await?;
    let service = factory::create_service(db, &stylist.id).await?;

    Ok(ProSetup {
        pro: User::from_entity(account),
        stylist,
        service,
    })
}

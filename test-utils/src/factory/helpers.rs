//! Shared helper utilities for factory methods.
//!
//! ID generation plus convenience methods for creating entities together with the rows
//! they depend on.

use sea_orm::{DatabaseConnection, DbErr};
use std::sync::atomic::AtomicU64;

use crate::factory::{salon, service, stylist, user};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Returns a process-wide unique number for building default identifiers and names.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a salon, a stylist working there and one active service offered by the stylist.
///
/// # Returns
/// - `Ok((salon, stylist, service))` - The created rows
/// - `Err(DbErr)` - Database error during insert
pub async fn create_service_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::salon::Model,
        entity::stylist::Model,
        entity::service::Model,
    ),
    DbErr,
> {
    let salon = salon::create_salon(db).await?;
    let stylist = stylist::create_stylist(db, &salon.id).await?;
    let service = service::create_service(db, &stylist.id).await?;

    Ok((salon, stylist, service))
}

/// Creates a customer along with a salon, stylist and service ready to be booked.
///
/// # Returns
/// - `Ok((user, salon, stylist, service))` - The created rows
/// - `Err(DbErr)` - Database error during insert
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::salon::Model,
        entity::stylist::Model,
        entity::service::Model,
    ),
    DbErr,
> {
    let user = user::create_user(db).await?;
    let (salon, stylist, service) = create_service_with_dependencies(db).await?;

    Ok((user, salon, stylist, service))
}

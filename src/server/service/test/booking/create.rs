use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue};

fn params(user_id: &str, stylist_id: &str, service_id: &str) -> CreateBookingParams {
    CreateBookingParams {
        user_id: user_id.to_string(),
        stylist_id: stylist_id.to_string(),
        service_id: service_id.to_string(),
        scheduled_at: Utc::now() + Duration::days(3),
        customer_notes: Some("Window seat please".to_string()),
    }
}

/// Tests that a new booking copies duration and price from the service.
///
/// Verifies the 60 minute / 75.0 service scenario and that a later price change on the
/// service does not alter the stored booking.
///
/// Expected: Ok with a pending booking carrying the service snapshot
#[tokio::test]
async fn snapshots_service_duration_and_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;
    assert_eq!(service.duration_minutes, 60);
    assert_eq!(service.price, 75.0);

    let booking_service = BookingService::new(db);
    let created = booking_service
        .create(params(&user.id, &stylist.id, &service.id))
        .await?;

    assert_eq!(created.booking.duration_minutes, 60);
    assert_eq!(created.booking.total_price, 75.0);
    assert_eq!(created.booking.status, BookingStatus::Pending);
    assert_eq!(created.booking.created_at, created.booking.updated_at);

    let mut active: entity::service::ActiveModel = service.into();
    active.price = ActiveValue::Set(95.0);
    active.duration_minutes = ActiveValue::Set(90);
    active.update(db).await?;

    let stored = booking_service
        .get_by_id(&created.booking.id, &requester(&user))
        .await?;
    assert_eq!(stored.booking.total_price, 75.0);
    assert_eq!(stored.booking.duration_minutes, 60);

    Ok(())
}

/// Tests that the created booking is enriched with related display names.
///
/// Expected: Ok with stylist, service and salon names set
#[tokio::test]
async fn enriches_created_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, salon, stylist, service) = create_booking_dependencies(db).await?;

    let created = BookingService::new(db)
        .create(params(&user.id, &stylist.id, &service.id))
        .await?;

    assert_eq!(created.stylist_name.as_deref(), Some(stylist.name.as_str()));
    assert_eq!(created.service_name.as_deref(), Some(service.name.as_str()));
    assert_eq!(created.salon_name.as_deref(), Some(salon.name.as_str()));
    assert_eq!(
        created.booking.customer_notes.as_deref(),
        Some("Window seat please")
    );

    Ok(())
}

/// Tests that booking an unknown service fails without writing anything.
///
/// Expected: Err(NotFound("Service not found")) and no booking rows
#[tokio::test]
async fn fails_for_unknown_service() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, _service) = create_booking_dependencies(db).await?;

    let result = BookingService::new(db)
        .create(params(&user.id, &stylist.id, "missing-service"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Service not found"));
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 0);

    Ok(())
}

/// Tests that booking with an unknown stylist fails without writing anything.
///
/// The service exists, so the stylist lookup is the one that fails.
///
/// Expected: Err(NotFound("Stylist not found")) and no booking rows
#[tokio::test]
async fn fails_for_unknown_stylist() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, _stylist, service) = create_booking_dependencies(db).await?;

    let result = BookingService::new(db)
        .create(params(&user.id, "missing-stylist", &service.id))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Stylist not found"));
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 0);

    Ok(())
}

/// Tests that the service is checked before the stylist when both are unknown.
///
/// Expected: Err(NotFound("Service not found"))
#[tokio::test]
async fn reports_missing_service_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = BookingService::new(db)
        .create(params(&user.id, "missing-stylist", "missing-service"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Service not found"));

    Ok(())
}

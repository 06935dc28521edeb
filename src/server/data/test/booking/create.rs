use super::*;

/// Tests inserting a booking.
///
/// Verifies that the booking starts pending/pending with the given snapshot values and
/// identical timestamps.
///
/// Expected: Ok with one booking row
#[tokio::test]
async fn creates_pending_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;
    let scheduled_at = Utc::now() + Duration::days(2);

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(NewBooking {
            user_id: user.id.clone(),
            stylist_id: stylist.id.clone(),
            service_id: service.id.clone(),
            scheduled_at,
            duration_minutes: 45,
            total_price: 45.0,
            customer_notes: Some("First visit".to_string()),
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.duration_minutes, 45);
    assert_eq!(booking.total_price, 45.0);
    assert_eq!(booking.customer_notes.as_deref(), Some("First visit"));
    assert_eq!(booking.created_at, booking.updated_at);
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a booking referencing an unknown service is rejected by the schema.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_service() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, _service) = create_booking_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .create(NewBooking {
            user_id: user.id,
            stylist_id: stylist.id,
            service_id: "missing".to_string(),
            scheduled_at: Utc::now(),
            duration_minutes: 60,
            total_price: 75.0,
            customer_notes: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

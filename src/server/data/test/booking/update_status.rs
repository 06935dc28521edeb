use super::*;

/// Tests updating a booking's status with stylist notes.
///
/// Expected: Ok(Some) with new status, notes set and updated_at refreshed
#[tokio::test]
async fn updates_status_and_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;
    let booking = factory::create_booking(db, &user.id, &stylist.id, &service.id).await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .update_status(
            &booking.id,
            BookingStatus::Confirmed,
            Some("Bring reference photos".to_string()),
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, BookingStatus::Confirmed);
    assert_eq!(
        updated.stylist_notes.as_deref(),
        Some("Bring reference photos")
    );
    assert!(updated.updated_at >= booking.updated_at);
    assert_eq!(updated.total_price, booking.total_price);

    Ok(())
}

/// Tests updating an unknown booking.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let result = repo
        .update_status("missing", BookingStatus::Cancelled, None)
        .await?;

    assert!(result.is_none());

    Ok(())
}

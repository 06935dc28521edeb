use super::*;

/// Tests cancelling a pending booking.
///
/// Expected: Ok with status cancelled and a refreshed `updated_at`
#[tokio::test]
async fn cancels_pending_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;
    let booking = factory::create_booking(db, &user.id, &stylist.id, &service.id).await?;

    let cancelled = BookingService::new(db)
        .cancel(&booking.id, &requester(&user))
        .await?;

    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert!(cancelled.updated_at >= booking.updated_at);

    Ok(())
}

/// Tests that cancelling twice succeeds both times.
///
/// Expected: Ok both times, booking stays cancelled
#[tokio::test]
async fn cancelling_twice_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;
    let booking = factory::create_booking(db, &user.id, &stylist.id, &service.id).await?;
    let booking_service = BookingService::new(db);

    let first = booking_service.cancel(&booking.id, &requester(&user)).await?;
    let second = booking_service.cancel(&booking.id, &requester(&user)).await?;

    assert_eq!(first.status, BookingStatus::Cancelled);
    assert_eq!(second.status, BookingStatus::Cancelled);

    Ok(())
}

/// Tests that confirmed and no-show bookings can also be cancelled.
///
/// Expected: Ok with status cancelled
#[tokio::test]
async fn cancels_any_non_completed_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;

    for status in [StoredStatus::Confirmed, StoredStatus::NoShow] {
        let booking = BookingFactory::new(db, &user.id, &stylist.id, &service.id)
            .status(status)
            .build()
            .await?;

        let cancelled = BookingService::new(db)
            .cancel(&booking.id, &requester(&user))
            .await?;

        assert_eq!(cancelled.status, BookingStatus::Cancelled);
    }

    Ok(())
}

/// Tests that a completed booking cannot be cancelled and stays unchanged.
///
/// Expected: Err(BadRequest("Cannot cancel a completed booking"))
#[tokio::test]
async fn rejects_completed_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;
    let booking = BookingFactory::new(db, &user.id, &stylist.id, &service.id)
        .status(StoredStatus::Completed)
        .build()
        .await?;

    let result = BookingService::new(db)
        .cancel(&booking.id, &requester(&user))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(ref msg)) if msg == "Cannot cancel a completed booking"
    ));

    let stored = entity::prelude::Booking::find_by_id(booking.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, StoredStatus::Completed);

    Ok(())
}

/// Tests cancelling an unknown booking.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = BookingService::new(db)
        .cancel("missing", &requester(&user))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that another user cannot cancel a booking.
///
/// Expected: Err(AccessDenied) and the booking stays pending
#[tokio::test]
async fn denies_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _salon, stylist, service) = create_booking_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &owner.id, &stylist.id, &service.id).await?;

    let result = BookingService::new(db)
        .cancel(&booking.id, &requester(&other))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let stored = entity::prelude::Booking::find_by_id(booking.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, StoredStatus::Pending);

    Ok(())
}

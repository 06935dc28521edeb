use super::*;

/// Tests the time-window query used for dashboard stats.
///
/// Verifies that cancelled bookings and bookings outside the window are excluded.
///
/// Expected: Ok with the single in-window, non-cancelled booking
#[tokio::test]
async fn gets_active_bookings_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;
    let start = Utc::now();
    let end = start + Duration::days(1);

    let inside = BookingFactory::new(db, &user.id, &stylist.id, &service.id)
        .scheduled_at(start + Duration::hours(2))
        .build()
        .await?;
    BookingFactory::new(db, &user.id, &stylist.id, &service.id)
        .scheduled_at(start + Duration::hours(3))
        .status(StoredStatus::Cancelled)
        .build()
        .await?;
    BookingFactory::new(db, &user.id, &stylist.id, &service.id)
        .scheduled_at(end + Duration::hours(1))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .get_active_by_stylist_between(&stylist.id, start, end)
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, inside.id);

    Ok(())
}

/// Tests counting distinct customers of a stylist.
///
/// Expected: Ok(2) for three bookings by two customers
#[tokio::test]
async fn counts_distinct_customers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_booking(db, &user.id, &stylist.id, &service.id).await?;
    factory::create_booking(db, &user.id, &stylist.id, &service.id).await?;
    factory::create_booking(db, &other.id, &stylist.id, &service.id).await?;

    let repo = BookingRepository::new(db);

    assert_eq!(repo.count_distinct_customers(&stylist.id).await?, 2);
    assert_eq!(repo.count_distinct_customers("nobody").await?, 0);

    Ok(())
}

/// Tests the per-customer query used for the client detail.
///
/// Expected: Ok with the customer's non-cancelled bookings with the stylist, most
/// recently scheduled first
#[tokio::test]
async fn gets_active_bookings_of_one_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    let now = Utc::now();

    let older = BookingFactory::new(db, &user.id, &stylist.id, &service.id)
        .scheduled_at(now - Duration::days(10))
        .status(StoredStatus::Completed)
        .build()
        .await?;
    let newer = BookingFactory::new(db, &user.id, &stylist.id, &service.id)
        .scheduled_at(now + Duration::days(2))
        .build()
        .await?;
    BookingFactory::new(db, &user.id, &stylist.id, &service.id)
        .status(StoredStatus::Cancelled)
        .build()
        .await?;
    factory::create_booking(db, &other.id, &stylist.id, &service.id).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .get_active_by_stylist_and_user(&stylist.id, &user.id)
        .await?;

    let ids: Vec<_> = bookings.iter().map(|b| b.id.clone()).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    assert_eq!(repo.get_active_by_stylist(&stylist.id).await?.len(), 3);
    assert!(repo.get_active_by_stylist("nobody").await?.is_empty());

    Ok(())
}

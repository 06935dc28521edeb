use super::*;

/// Tests listing a user's bookings.
///
/// Verifies that only the user's bookings are returned, most recently scheduled first.
///
/// Expected: Ok with own bookings in scheduled_at DESC order
#[tokio::test]
async fn lists_own_bookings_latest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    let base = Utc::now();

    let early = BookingFactory::new(db, &user.id, &stylist.id, &service.id)
        .scheduled_at(base + Duration::days(1))
        .build()
        .await?;
    let late = BookingFactory::new(db, &user.id, &stylist.id, &service.id)
        .scheduled_at(base + Duration::days(5))
        .build()
        .await?;
    BookingFactory::new(db, &other.id, &stylist.id, &service.id)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let (bookings, total) = repo
        .get_paginated_by_user(&user.id, None, PageRequest::default())
        .await?;

    assert_eq!(total, 2);
    let ids: Vec<_> = bookings.iter().map(|b| b.id.clone()).collect();
    assert_eq!(ids, vec![late.id, early.id]);

    Ok(())
}

/// Tests filtering a user's bookings by status.
///
/// Expected: Ok with only the cancelled booking
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;

    BookingFactory::new(db, &user.id, &stylist.id, &service.id)
        .build()
        .await?;
    let cancelled = BookingFactory::new(db, &user.id, &stylist.id, &service.id)
        .status(StoredStatus::Cancelled)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let (bookings, total) = repo
        .get_paginated_by_user(
            &user.id,
            Some(BookingStatus::Cancelled),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(bookings[0].id, cancelled.id);

    Ok(())
}

/// Tests the second page of fifteen bookings with a page size of ten.
///
/// Expected: Ok with five bookings and a total of fifteen
#[tokio::test]
async fn returns_remaining_bookings_on_second_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;
    for day in 0..15 {
        BookingFactory::new(db, &user.id, &stylist.id, &service.id)
            .scheduled_at(Utc::now() + Duration::days(day))
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);
    let (bookings, total) = repo
        .get_paginated_by_user(&user.id, None, PageRequest::new(Some(2), Some(10)))
        .await?;

    assert_eq!(total, 15);
    assert_eq!(bookings.len(), 5);

    Ok(())
}

use super::*;

/// Tests that only the requester's bookings are listed, latest first.
///
/// Expected: Ok with the owner's two bookings in scheduled_at DESC order
#[tokio::test]
async fn lists_own_bookings_latest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    let now = Utc::now();

    let earlier = BookingFactory::new(db, &user.id, &stylist.id, &service.id)
        .scheduled_at(now + Duration::days(1))
        .build()
        .await?;
    let later = BookingFactory::new(db, &user.id, &stylist.id, &service.id)
        .scheduled_at(now + Duration::days(5))
        .build()
        .await?;
    factory::create_booking(db, &other.id, &stylist.id, &service.id).await?;

    let page = BookingService::new(db)
        .get_paginated_for_user(&user.id, &requester(&user), None, PageRequest::default())
        .await?;

    assert_eq!(page.total, 2);
    let ids: Vec<_> = page.items.iter().map(|d| d.booking.id.clone()).collect();
    assert_eq!(ids, vec![later.id, earlier.id]);
    assert!(page.items.iter().all(|d| d.stylist_name.is_some()));

    Ok(())
}

/// Tests that listing another user's bookings is denied.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_other_requesters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let result = BookingService::new(db)
        .get_paginated_for_user(&owner.id, &requester(&other), None, PageRequest::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests the second page of fifteen bookings with the default page size.
///
/// Expected: Ok with five bookings, total 15
#[tokio::test]
async fn second_page_holds_remainder() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;
    for offset in 0..15 {
        BookingFactory::new(db, &user.id, &stylist.id, &service.id)
            .scheduled_at(Utc::now() + Duration::hours(offset))
            .build()
            .await?;
    }

    let page = BookingService::new(db)
        .get_paginated_for_user(
            &user.id,
            &requester(&user),
            None,
            PageRequest::new(Some(2), Some(10)),
        )
        .await?;

    assert_eq!(page.items.len(), 5);
    assert_eq!(page.total, 15);
    assert_eq!(page.page, 2);
    assert_eq!(page.page_size, 10);

    Ok(())
}

/// Tests that oversized page sizes are clamped.
///
/// Expected: Ok with page_size 100
#[tokio::test]
async fn clamps_page_size() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let page = BookingService::new(db)
        .get_paginated_for_user(
            &user.id,
            &requester(&user),
            None,
            PageRequest::new(Some(0), Some(500)),
        )
        .await?;

    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 100);
    assert!(page.items.is_empty());

    Ok(())
}

/// Tests filtering by status.
///
/// Expected: Ok with only the cancelled booking
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _salon, stylist, service) = create_booking_dependencies(db).await?;
    factory::create_booking(db, &user.id, &stylist.id, &service.id).await?;
    let cancelled = BookingFactory::new(db, &user.id, &stylist.id, &service.id)
        .status(StoredStatus::Cancelled)
        .build()
        .await?;

    let page = BookingService::new(db)
        .get_paginated_for_user(
            &user.id,
            &requester(&user),
            Some(BookingStatus::Cancelled),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].booking.id, cancelled.id);

    Ok(())
}

use super::*;

/// Tests listing the stylist's bookings.
///
/// Expected: Ok with only this stylist's bookings, latest first, with customer and service
/// names resolved
#[tokio::test]
async fn lists_stylist_bookings_with_customers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = setup_pro(db).await?;
    let other = setup_pro(db).await?;
    let customer = UserFactory::new(db).name("Alice Johnson").build().await?;

    let first = BookingFactory::new(db, &customer.id, &setup.stylist.id, &setup.service.id)
        .scheduled_at(Utc::now() + Duration::days(1))
        .build()
        .await?;
    let second = BookingFactory::new(db, &customer.id, &setup.stylist.id, &setup.service.id)
        .scheduled_at(Utc::now() + Duration::days(2))
        .build()
        .await?;
    factory::create_booking(db, &customer.id, &other.stylist.id, &other.service.id).await?;

    let page = ProDashboardService::new(db)
        .get_bookings(&setup.pro, None, PageRequest::default())
        .await?;

    assert_eq!(page.total, 2);
    let ids: Vec<_> = page.items.iter().map(|b| b.booking.id.clone()).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert_eq!(page.items[0].customer.name.as_deref(), Some("Alice Johnson"));
    assert_eq!(
        page.items[0].service_name.as_deref(),
        Some(setup.service.name.as_str())
    );

    Ok(())
}

/// Tests filtering the stylist's bookings by status.
///
/// Expected: Ok with only confirmed bookings
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = setup_pro(db).await?;
    let customer = factory::create_user(db).await?;
    factory::create_booking(db, &customer.id, &setup.stylist.id, &setup.service.id).await?;
    let confirmed = BookingFactory::new(db, &customer.id, &setup.stylist.id, &setup.service.id)
        .status(StoredStatus::Confirmed)
        .build()
        .await?;

    let page = ProDashboardService::new(db)
        .get_bookings(
            &setup.pro,
            Some(BookingStatus::Confirmed),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].booking.id, confirmed.id);

    Ok(())
}

use super::*;

/// Tests earnings over each reporting period.
///
/// Bookings are spread over today, earlier this week, this month and this year, plus a
/// cancelled booking today, one tomorrow and one older than a year.
///
/// Expected: Ok with each window's totals, count and average, excluding cancelled and
/// out-of-window bookings
#[tokio::test]
async fn sums_bookings_per_period() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = setup_pro(db).await?;
    let customer = UserFactory::new(db).name("Alice Johnson").build().await?;
    let noon = Utc::now()
        .date_naive()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc();

    let book = |scheduled_at: chrono::DateTime<Utc>, total_price: f64| {
        BookingFactory::new(db, &customer.id, &setup.stylist.id, &setup.service.id)
            .scheduled_at(scheduled_at)
            .total_price(total_price)
    };

    let latest = book(noon, 75.0).build().await?;
    book(noon - Duration::hours(1), 40.0).build().await?;
    book(noon, 999.0)
        .status(StoredStatus::Cancelled)
        .build()
        .await?;
    book(noon + Duration::days(1), 60.0).build().await?;
    book(noon - Duration::days(3), 30.0).build().await?;
    book(noon - Duration::days(20), 50.0).build().await?;
    book(noon - Duration::days(200), 10.0).build().await?;
    book(noon - Duration::days(400), 5.0).build().await?;

    let service = ProDashboardService::new(db);

    let today = service
        .get_earnings(&setup.pro, EarningsPeriod::Today)
        .await?;
    assert_eq!(today.total_earnings, 115.0);
    assert_eq!(today.total_bookings(), 2);
    assert_eq!(today.average_per_booking(), 57.5);
    assert_eq!(today.transactions[0].booking.id, latest.id);
    assert_eq!(
        today.transactions[0].customer.name.as_deref(),
        Some("Alice Johnson")
    );

    let week = service.get_earnings(&setup.pro, EarningsPeriod::Week).await?;
    assert_eq!(week.total_earnings, 145.0);
    assert_eq!(week.total_bookings(), 3);

    let month = service
        .get_earnings(&setup.pro, EarningsPeriod::Month)
        .await?;
    assert_eq!(month.total_earnings, 195.0);
    assert_eq!(month.total_bookings(), 4);

    let year = service.get_earnings(&setup.pro, EarningsPeriod::Year).await?;
    assert_eq!(year.total_earnings, 205.0);
    assert_eq!(year.total_bookings(), 5);
    assert_eq!(year.average_per_booking(), 41.0);

    Ok(())
}

/// Tests earnings of a stylist without bookings.
///
/// Expected: Ok with zero totals and a zero average
#[tokio::test]
async fn empty_period_has_zero_average() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = setup_pro(db).await?;

    let earnings = ProDashboardService::new(db)
        .get_earnings(&setup.pro, EarningsPeriod::default())
        .await?;

    assert_eq!(earnings.period, EarningsPeriod::Week);
    assert_eq!(earnings.total_earnings, 0.0);
    assert_eq!(earnings.total_bookings(), 0);
    assert_eq!(earnings.average_per_booking(), 0.0);
    assert!(earnings.transactions.is_empty());

    Ok(())
}

/// Tests earnings for a user without a stylist profile.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_users_without_stylist_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = User::from_entity(factory::create_user(db).await?);

    let result = ProDashboardService::new(db)
        .get_earnings(&customer, EarningsPeriod::Today)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

use super::*;

/// Tests the dashboard figures.
///
/// Creates bookings today, earlier this week, last month and a cancelled one today for
/// two distinct customers.
///
/// Expected: Ok with today's non-cancelled count and earnings, the weekly count, two
/// clients and the stylist rating
#[tokio::test]
async fn computes_dashboard_figures() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = setup_pro(db).await?;
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let today = Utc::now()
        .date_naive()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc();

    let book = |customer: &entity::user::Model| {
        BookingFactory::new(db, &customer.id, &setup.stylist.id, &setup.service.id)
    };

    book(&alice).scheduled_at(today).total_price(75.0).build().await?;
    book(&bob).scheduled_at(today).total_price(40.0).build().await?;
    book(&bob)
        .scheduled_at(today)
        .total_price(999.0)
        .status(StoredStatus::Cancelled)
        .build()
        .await?;
    book(&alice)
        .scheduled_at(today - Duration::days(3))
        .build()
        .await?;
    book(&alice)
        .scheduled_at(today - Duration::days(30))
        .build()
        .await?;

    let stats = ProDashboardService::new(db).get_stats(&setup.pro).await?;

    assert_eq!(stats.today_bookings, 2);
    assert_eq!(stats.today_earnings, 115.0);
    assert_eq!(stats.this_week_bookings, 3);
    assert_eq!(stats.total_clients, 2);
    assert_eq!(stats.rating, 4.8);

    Ok(())
}

/// Tests the dashboard for a user without a stylist profile.
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

    let result = ProDashboardService::new(db).get_stats(&customer).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

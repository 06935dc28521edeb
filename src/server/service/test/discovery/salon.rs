use super::*;

/// Tests listing salons through the service.
///
/// Expected: Ok with active salons only, best rated first, and page metadata
#[tokio::test]
async fn lists_active_salons_by_rating() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_discovery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let good = SalonFactory::new(db).rating(4.2).build().await?;
    let best = SalonFactory::new(db).rating(4.9).build().await?;
    SalonFactory::new(db).rating(5.0).active(false).build().await?;

    let page = SalonService::new(db)
        .get_paginated(&SalonFilter::default(), PageRequest::default())
        .await?;

    let ids: Vec<_> = page.items.iter().map(|s| s.id.clone()).collect();
    assert_eq!(ids, vec![best.id, good.id]);
    assert_eq!(page.total, 2);
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 10);

    Ok(())
}

/// Tests the stylist roster of a salon.
///
/// Expected: Ok with active stylists only, each carrying their active services
#[tokio::test]
async fn roster_includes_active_stylists_with_services() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_discovery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let salon = factory::create_salon(db).await?;
    let stylist = StylistFactory::new(db, &salon.id).rating(4.9).build().await?;
    StylistFactory::new(db, &salon.id).active(false).build().await?;
    let cut = ServiceFactory::new(db, &stylist.id).name("Cut").build().await?;
    ServiceFactory::new(db, &stylist.id)
        .name("Retired")
        .active(false)
        .build()
        .await?;

    let roster = SalonService::new(db)
        .get_stylists(&salon.id)
        .await?
        .unwrap();

    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].stylist.id, stylist.id);
    let services: Vec<_> = roster[0].services.iter().map(|s| s.id.clone()).collect();
    assert_eq!(services, vec![cut.id]);

    Ok(())
}

/// Tests the roster of an unknown salon.
///
/// Expected: Ok(None)
#[tokio::test]
async fn roster_of_unknown_salon_is_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_discovery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let roster = SalonService::new(db).get_stylists("missing").await?;

    assert!(roster.is_none());

    Ok(())
}

use super::*;

/// Tests the stylist detail view.
///
/// Expected: Ok with services, salon name and a "city, state" location
#[tokio::test]
async fn detail_carries_salon_location() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_discovery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (salon, stylist, service) = create_service_with_dependencies(db).await?;

    let detail = StylistService::new(db)
        .get_detail(&stylist.id)
        .await?
        .unwrap()
        .into_dto();

    assert_eq!(detail.stylist.id, stylist.id);
    assert_eq!(detail.stylist.services.len(), 1);
    assert_eq!(detail.stylist.services[0].id, service.id);
    assert_eq!(detail.salon_name.as_deref(), Some(salon.name.as_str()));
    assert_eq!(detail.location.as_deref(), Some("New York, NY"));

    Ok(())
}

/// Tests the location of a salon without a state.
///
/// Expected: Ok with the city alone as location
#[tokio::test]
async fn location_falls_back_to_city() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_discovery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let salon = SalonFactory::new(db)
        .city("London")
        .state(None)
        .build()
        .await?;
    let stylist = factory::create_stylist(db, &salon.id).await?;

    let detail = StylistService::new(db)
        .get_detail(&stylist.id)
        .await?
        .unwrap()
        .into_dto();

    assert_eq!(detail.location.as_deref(), Some("London"));

    Ok(())
}

/// Tests reading unknown stylists.
///
/// Expected: Ok(None) from detail, services and availability
#[tokio::test]
async fn unknown_stylist_is_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_discovery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = StylistService::new(db);

    assert!(service.get_detail("missing").await?.is_none());
    assert!(service.get_services("missing").await?.is_none());
    assert!(service
        .get_availability("missing", "2025-10-20")
        .await?
        .is_none());

    Ok(())
}

/// Tests the services of a stylist.
///
/// Expected: Ok with active services ordered by name
#[tokio::test]
async fn services_are_active_and_ordered_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_discovery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let salon = factory::create_salon(db).await?;
    let stylist = factory::create_stylist(db, &salon.id).await?;
    ServiceFactory::new(db, &stylist.id).name("Trim").build().await?;
    ServiceFactory::new(db, &stylist.id).name("Balayage").build().await?;
    ServiceFactory::new(db, &stylist.id)
        .name("Perm")
        .active(false)
        .build()
        .await?;

    let services = StylistService::new(db)
        .get_services(&stylist.id)
        .await?
        .unwrap();

    let names: Vec<_> = services.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Balayage", "Trim"]);

    Ok(())
}

/// Tests availability for a known stylist.
///
/// Expected: Ok with the requested date and the fixed daily slots
#[tokio::test]
async fn availability_lists_daily_slots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_discovery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_salon, stylist, _service) = create_service_with_dependencies(db).await?;

    let availability = StylistService::new(db)
        .get_availability(&stylist.id, "2025-10-20")
        .await?
        .unwrap()
        .into_dto();

    assert_eq!(availability.date.to_string(), "2025-10-20");
    assert_eq!(availability.stylist_id, stylist.id);
    assert_eq!(availability.available_slots.len(), 14);

    Ok(())
}

/// Tests availability with a malformed date.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn availability_rejects_bad_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_discovery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_salon, stylist, _service) = create_service_with_dependencies(db).await?;

    let result = StylistService::new(db)
        .get_availability(&stylist.id, "20/10/2025")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the pro listing with city and rating filters.
///
/// Expected: Ok with matching active stylists, best rated first, services attached
#[tokio::test]
async fn lists_pros_with_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_discovery_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let nyc = factory::create_salon(db).await?;
    let london = SalonFactory::new(db).city("London").build().await?;
    let top = StylistFactory::new(db, &nyc.id).rating(4.9).build().await?;
    let solid = StylistFactory::new(db, &nyc.id).rating(4.5).build().await?;
    StylistFactory::new(db, &nyc.id).rating(3.9).build().await?;
    StylistFactory::new(db, &london.id).rating(5.0).build().await?;
    ServiceFactory::new(db, &top.id).build().await?;

    let pros = StylistService::new(db)
        .list_pros(
            &ProFilter {
                city: Some("new york".to_string()),
                min_rating: Some(4.5),
            },
            PageRequest::default(),
        )
        .await?;

    let ids: Vec<_> = pros.iter().map(|p| p.stylist.id.clone()).collect();
    assert_eq!(ids, vec![top.id, solid.id]);
    assert_eq!(pros[0].services.len(), 1);
    assert!(pros[1].services.is_empty());

    Ok(())
}

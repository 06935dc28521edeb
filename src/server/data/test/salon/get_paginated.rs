use super::*;

/// Tests that only active salons are listed, best rated first.
///
/// Expected: Ok with inactive salon excluded and rating DESC ordering
#[tokio::test]
async fn lists_active_salons_by_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Salon)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SalonFactory::new(db).id("salon-a").rating(4.7).build().await?;
    SalonFactory::new(db).id("salon-b").rating(4.9).build().await?;
    SalonFactory::new(db).id("salon-c").rating(4.8).build().await?;
    SalonFactory::new(db)
        .id("salon-d")
        .rating(5.0)
        .active(false)
        .build()
        .await?;

    let repo = SalonRepository::new(db);
    let (salons, total) = repo
        .get_paginated(&SalonFilter::default(), PageRequest::default())
        .await?;

    assert_eq!(total, 3);
    let ids: Vec<_> = salons.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["salon-b", "salon-c", "salon-a"]);

    Ok(())
}

/// Tests that equal ratings fall back to ID ordering.
///
/// Expected: Ok with ties ordered by id ASC
#[tokio::test]
async fn breaks_rating_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Salon)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SalonFactory::new(db).id("salon-z").rating(4.5).build().await?;
    SalonFactory::new(db).id("salon-m").rating(4.5).build().await?;
    SalonFactory::new(db).id("salon-a").rating(4.5).build().await?;

    let repo = SalonRepository::new(db);
    let (salons, _) = repo
        .get_paginated(&SalonFilter::default(), PageRequest::default())
        .await?;

    let ids: Vec<_> = salons.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["salon-a", "salon-m", "salon-z"]);

    Ok(())
}

/// Tests the city filter is a case-insensitive substring match.
///
/// Expected: Ok with only salons whose city contains "york"
#[tokio::test]
async fn filters_by_city_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Salon)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SalonFactory::new(db).id("salon-ny").city("New York").build().await?;
    SalonFactory::new(db).id("salon-la").city("Los Angeles").build().await?;

    let repo = SalonRepository::new(db);
    let filter = SalonFilter {
        city: Some("YORK".to_string()),
        search: None,
    };
    let (salons, total) = repo.get_paginated(&filter, PageRequest::default()).await?;

    assert_eq!(total, 1);
    assert_eq!(salons[0].id, "salon-ny");

    Ok(())
}

/// Tests the search filter matches either name or description.
///
/// Expected: Ok with salons matching "color" in name or description
#[tokio::test]
async fn searches_name_or_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Salon)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SalonFactory::new(db)
        .id("salon-1")
        .name("Color Studio NYC")
        .description(None)
        .build()
        .await?;
    SalonFactory::new(db)
        .id("salon-2")
        .name("Elite Hair Studio")
        .description(Some("Cutting-edge styling and COLOR services".to_string()))
        .build()
        .await?;
    SalonFactory::new(db)
        .id("salon-3")
        .name("Downtown Barbers")
        .description(Some("Classic barbershop".to_string()))
        .build()
        .await?;

    let repo = SalonRepository::new(db);
    let filter = SalonFilter {
        city: None,
        search: Some("color".to_string()),
    };
    let (salons, total) = repo.get_paginated(&filter, PageRequest::default()).await?;

    assert_eq!(total, 2);
    let mut ids: Vec<_> = salons.iter().map(|s| s.id.clone()).collect();
    ids.sort();
    assert_eq!(ids, vec!["salon-1", "salon-2"]);

    Ok(())
}

/// Tests paging through salons.
///
/// Expected: Ok with a partial last page and an unchanged total
#[tokio::test]
async fn returns_partial_last_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Salon)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        SalonFactory::new(db).build().await?;
    }

    let repo = SalonRepository::new(db);
    let (salons, total) = repo
        .get_paginated(&SalonFilter::default(), PageRequest::new(Some(2), Some(3)))
        .await?;

    assert_eq!(total, 5);
    assert_eq!(salons.len(), 2);

    Ok(())
}

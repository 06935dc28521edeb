use super::*;

/// Tests looking a user up by each of its identifiers.
///
/// Expected: Ok(Some) for id, external uid and email; Ok(None) for unknown values
#[tokio::test]
async fn finds_user_by_each_identifier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .external_uid("provider-uid-1")
        .email("carol@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_by_id(&user.id).await?.unwrap().id, user.id);
    assert_eq!(
        repo.find_by_external_uid("provider-uid-1")
            .await?
            .unwrap()
            .id,
        user.id
    );
    assert_eq!(
        repo.find_by_email("carol@example.com").await?.unwrap().id,
        user.id
    );

    assert!(repo.find_by_id("missing").await?.is_none());
    assert!(repo.find_by_external_uid("missing").await?.is_none());
    assert!(repo.find_by_email("missing@example.com").await?.is_none());

    Ok(())
}

/// Tests batch lookup skips unknown IDs and handles empty input.
///
/// Expected: Ok with only the known users
#[tokio::test]
async fn finds_many_users_by_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let mut found = repo
        .find_many_by_ids(vec![
            first.id.clone(),
            second.id.clone(),
            "missing".to_string(),
        ])
        .await?
        .into_iter()
        .map(|u| u.id)
        .collect::<Vec<_>>();
    found.sort();

    let mut expected = vec![first.id, second.id];
    expected.sort();
    assert_eq!(found, expected);

    assert!(repo.find_many_by_ids(Vec::new()).await?.is_empty());

    Ok(())
}

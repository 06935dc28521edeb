use super::*;

/// Tests a partial profile update.
///
/// Verifies that only provided fields change and `updated_at` moves forward.
///
/// Expected: Ok(Some) with name and phone updated, email untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            &user.id,
            UpdateUserParams {
                name: Some("New Name".to_string()),
                phone: Some("+1-555-0199".to_string()),
                profile_image_url: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.phone.as_deref(), Some("+1-555-0199"));
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.profile_image_url, None);
    assert!(updated.updated_at >= user.updated_at);

    Ok(())
}

/// Tests updating a user that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update("missing", UpdateUserParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests linking an external identity to an existing account.
///
/// Expected: Ok(Some) with external_uid set, found afterwards by that uid
#[tokio::test]
async fn links_external_uid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let linked = repo
        .link_external_uid(&user.id, "provider-uid-9")
        .await?
        .unwrap();

    assert_eq!(linked.external_uid.as_deref(), Some("provider-uid-9"));
    assert_eq!(
        repo.find_by_external_uid("provider-uid-9")
            .await?
            .unwrap()
            .id,
        user.id
    );

    Ok(())
}

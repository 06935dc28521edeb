use super::*;

/// Tests updating some profile fields.
///
/// Expected: Ok with the provided fields changed and the others kept
#[tokio::test]
async fn updates_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = UserFactory::new(db).name("Bob").build().await?;

    let updated = AuthService::new(db, &tokens)
        .update_profile(
            &user.id,
            UpdateUserParams {
                phone: Some("+1-555-0102".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Bob");
    assert_eq!(updated.phone.as_deref(), Some("+1-555-0102"));

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(NotFound("User not found"))
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let result = AuthService::new(db, &tokens)
        .update_profile("ghost", UpdateUserParams::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "User not found"));

    Ok(())
}

use super::*;

/// Tests a valid access token for a stored user.
///
/// Expected: Ok(User) for the token subject
#[tokio::test]
async fn accepts_access_token_of_stored_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, chain) = credentials(false);

    let user = UserFactory::new(db).name("Alice").build().await?;
    let headers = bearer(&tokens.issue(&user.id, Some(&user.email))?);

    let authenticated = AuthGuard::new(db, &chain, &headers).require().await?;

    assert_eq!(authenticated.id, user.id);
    assert_eq!(authenticated.name, "Alice");

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingCredential)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_tokens, chain) = credentials(false);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &chain, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingCredential))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidCredential)
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_tokens, chain) = credentials(false);

    let user = UserFactory::new(db).build().await?;
    let mut other_config = Config::for_test();
    other_config.secret_key = "another-secret".to_string();
    let foreign = TokenService::from_config(&other_config).issue(&user.id, None)?;
    let headers = bearer(&foreign);

    let result = AuthGuard::new(db, &chain, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredential(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user does not exist.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_of_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (tokens, chain) = credentials(false);
    let headers = bearer(&tokens.issue("ghost", None)?);

    let result = AuthGuard::new(db, &chain, &headers).require().await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(subject))) => {
            assert_eq!(subject, "ghost")
        }
        _ => panic!("expected UserNotInDatabase"),
    }

    Ok(())
}

/// Tests the development sentinel when it is disabled.
///
/// Expected: Err(AuthError::InvalidCredential)
#[tokio::test]
async fn rejects_sentinel_when_disabled() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_tokens, chain) = credentials(false);

    UserFactory::new(db)
        .external_uid(SENTINEL_SUBJECT)
        .build()
        .await?;
    let headers = bearer(SENTINEL_CREDENTIAL);

    let result = AuthGuard::new(db, &chain, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredential(_)))
    ));

    Ok(())
}

/// Tests the development sentinel when it is enabled.
///
/// Expected: Ok(User) linked to the sentinel's external UID
#[tokio::test]
async fn accepts_sentinel_when_enabled() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_tokens, chain) = credentials(true);

    let demo = UserFactory::new(db)
        .external_uid(SENTINEL_SUBJECT)
        .build()
        .await?;
    let headers = bearer(SENTINEL_CREDENTIAL);

    let authenticated = AuthGuard::new(db, &chain, &headers).require().await?;

    assert_eq!(authenticated.id, demo.id);

    Ok(())
}

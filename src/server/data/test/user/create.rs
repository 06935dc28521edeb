use super::*;

/// Tests creating a user without an explicit ID.
///
/// Verifies that the repository generates a UUID primary key and stores the
/// provided fields with admin disabled.
///
/// Expected: Ok with UUID id
#[tokio::test]
async fn creates_user_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("alice@example.com")).await?;

    assert!(uuid::Uuid::parse_str(&user.id).is_ok());
    assert_eq!(user.email, "alice@example.com");
    assert!(!user.is_admin);
    assert_eq!(user.created_at, user.updated_at);

    Ok(())
}

/// Tests creating a user with an explicit ID.
///
/// Expected: Ok with the given id stored
#[tokio::test]
async fn creates_user_with_explicit_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            id: Some("user-42".to_string()),
            ..params("bob@example.com")
        })
        .await?;

    assert_eq!(user.id, "user-42");
    assert!(repo.find_by_id("user-42").await?.is_some());

    Ok(())
}

/// Tests that the unique email constraint is enforced.
///
/// Expected: Err on second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("dup@example.com")).await?;

    let result = repo.create(params("dup@example.com")).await;

    assert!(result.is_err());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

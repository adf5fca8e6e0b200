use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::{data::user::UserRepository, model::user::CreateUserParams};

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        password_hash: "$2b$04$hashhashhashhashhashhash".to_string(),
        name: Some("Test User".to_string()),
        role: UserRole::User,
    }
}

/// Tests creating a user and finding it by email.
///
/// Expected: Ok with the user retrievable under its email address
#[tokio::test]
async fn creates_and_finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(params("couple@example.com")).await?;

    let found = repo.find_by_email("couple@example.com").await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.role, UserRole::User);

    Ok(())
}

/// Tests that lookups for unknown emails return None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_email_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("nobody@example.com").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests finding a user by id.
///
/// Expected: Ok with the user found under its generated id
#[tokio::test]
async fn finds_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(params("id-lookup@example.com")).await?;

    let found = repo.find_by_id(created.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().email, "id-lookup@example.com");

    Ok(())
}

/// Tests that the unique index on email rejects a second insert.
///
/// Expected: Err from the database on the duplicate insert
#[tokio::test]
async fn duplicate_email_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wedding_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("taken@example.com")).await?;

    let result = repo.create(params("taken@example.com")).await;

    assert!(result.is_err());

    Ok(())
}

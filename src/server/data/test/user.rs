use crate::server::data::user::UserRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

/// Tests email lookups ignore role and activity.
///
/// Expected: Ok(Some) for the inactive user's email
#[tokio::test]
async fn finds_inactive_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("gone@example.com")
        .active(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("gone@example.com").await?.unwrap();

    assert_eq!(found.id, user.id);
    assert!(repo.find_by_email("missing@example.com").await?.is_none());

    Ok(())
}

/// Tests a user's own email is not reported as taken when excluded.
///
/// Expected: taken for others, free for the owner
#[tokio::test]
async fn email_taken_excludes_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.email_taken(&user.email, None).await?);
    assert!(!repo.email_taken(&user.email, Some(user.id)).await?);
    assert!(!repo.email_taken("free@example.com", None).await?);

    Ok(())
}

/// Tests soft delete flips the activity flag and keeps the row.
///
/// Expected: row present with is_active false
#[tokio::test]
async fn set_active_false_keeps_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_active(user.id, false).await?;

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_active);

    Ok(())
}

/// Tests soft-deleting an unknown user.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn set_active_fails_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_active(uuid::Uuid::new_v4(), false).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

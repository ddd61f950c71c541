use crate::server::data::token_blocklist::TokenBlocklistRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use uuid::Uuid;

/// Tests a revoked token id is reported and others are not.
///
/// Expected: only the added jti is revoked
#[tokio::test]
async fn reports_revoked_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TokenBlocklistRepository::new(db);
    let jti = Uuid::new_v4();
    repo.add(jti).await?;

    assert!(repo.is_revoked(jti).await?);
    assert!(!repo.is_revoked(Uuid::new_v4()).await?);

    Ok(())
}

/// Tests revoking the same token twice.
///
/// Expected: Ok both times
#[tokio::test]
async fn revoking_twice_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TokenBlocklistRepository::new(db);
    let jti = Uuid::new_v4();
    repo.add(jti).await?;
    repo.add(jti).await?;

    assert!(repo.is_revoked(jti).await?);

    Ok(())
}

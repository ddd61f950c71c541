use super::*;

/// Tests a login-issued access token on a fresh-only endpoint.
///
/// Expected: Ok(Claims) with fresh=true
#[tokio::test]
async fn accepts_fresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let headers = bearer(&keys.issue(Uuid::new_v4(), TokenType::Access, true)?);

    let claims = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Fresh])
        .await?;

    assert!(claims.fresh);

    Ok(())
}

/// Tests a refreshed access token on a fresh-only endpoint.
///
/// Expected: Err(AuthError::FreshTokenRequired)
#[tokio::test]
async fn rejects_non_fresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let headers = bearer(&keys.issue(Uuid::new_v4(), TokenType::Access, false)?);

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Fresh])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::FreshTokenRequired))
    ));

    Ok(())
}

/// Tests that revocation is checked before freshness.
///
/// Expected: Err(AuthError::TokenRevoked) for a revoked non-fresh token
#[tokio::test]
async fn revocation_checked_before_freshness() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let token = keys.issue(Uuid::new_v4(), TokenType::Access, false)?;
    TokenBlocklistRepository::new(db)
        .add(keys.decode(&token)?.jti)
        .await?;
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Fresh])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenRevoked))
    ));

    Ok(())
}

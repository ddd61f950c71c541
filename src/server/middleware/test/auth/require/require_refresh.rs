use super::*;

/// Tests a refresh token on the refresh endpoint.
///
/// Expected: Ok(Claims) with token_type=refresh
#[tokio::test]
async fn accepts_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let user_id = Uuid::new_v4();
    let headers = bearer(&keys.issue(user_id, TokenType::Refresh, false)?);

    let claims = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Refresh])
        .await?;

    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.token_type, TokenType::Refresh);

    Ok(())
}

/// Tests an access token on the refresh endpoint.
///
/// Expected: Err(AuthError::WrongTokenType) expecting refresh
#[tokio::test]
async fn rejects_access_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let headers = bearer(&keys.issue(Uuid::new_v4(), TokenType::Access, true)?);

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Refresh])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::WrongTokenType {
            expected: TokenType::Refresh
        }))
    ));

    Ok(())
}

/// Tests a revoked refresh token.
///
/// Expected: Err(AuthError::TokenRevoked)
#[tokio::test]
async fn rejects_revoked_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let token = keys.issue(Uuid::new_v4(), TokenType::Refresh, false)?;
    TokenBlocklistRepository::new(db)
        .add(keys.decode(&token)?.jti)
        .await?;
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Refresh])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenRevoked))
    ));

    Ok(())
}

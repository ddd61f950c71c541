use super::*;

mod require_fresh;
mod require_refresh;

/// Tests a valid access token with no extra requirements.
///
/// Expected: Ok(Claims) for the token's user
#[tokio::test]
async fn accepts_access_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let user_id = Uuid::new_v4();
    let headers = bearer(&keys.issue(user_id, TokenType::Access, false)?);

    let claims = AuthGuard::new(db, &keys, &headers).require(&[]).await?;

    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.token_type, TokenType::Access);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingAuthorizationHeader)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingAuthorizationHeader))
    ));

    Ok(())
}

/// Tests a header that is not a bearer credential.
///
/// Expected: Err(AuthError::MissingAuthorizationHeader)
#[tokio::test]
async fn rejects_non_bearer_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingAuthorizationHeader))
    ));

    Ok(())
}

/// Tests a token that does not decode.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_malformed_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let headers = bearer("definitely.not.valid");

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests an access token after logout.
///
/// Expected: Err(AuthError::TokenRevoked)
#[tokio::test]
async fn rejects_revoked_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let token = keys.issue(Uuid::new_v4(), TokenType::Access, true)?;
    let claims = keys.decode(&token)?;
    TokenBlocklistRepository::new(db).add(claims.jti).await?;
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenRevoked))
    ));

    Ok(())
}

/// Tests a refresh token presented to an access-only endpoint.
///
/// Expected: Err(AuthError::WrongTokenType) expecting access
#[tokio::test]
async fn rejects_refresh_token_as_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let headers = bearer(&keys.issue(Uuid::new_v4(), TokenType::Refresh, false)?);

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::WrongTokenType {
            expected: TokenType::Access
        }))
    ));

    Ok(())
}

use super::*;
use crate::server::{
    data::token_blocklist::TokenBlocklistRepository,
    model::auth::LoginParams,
    service::auth::AuthService,
};
use test_utils::{factory::user::UserFactory, fixture::user::DEFAULT_PASSWORD};

/// Tests login with correct credentials.
///
/// Expected: fresh access token and a refresh token for the user
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let keys = test_keys();

    let result = AuthService::new(db, &keys)
        .login(LoginParams {
            email: user.email.clone(),
            password: DEFAULT_PASSWORD.to_string(),
        })
        .await?;

    assert_eq!(result.email, user.email);
    let access = keys.decode(&result.access_token)?;
    assert_eq!(access.sub, user.id);
    assert_eq!(access.token_type, TokenType::Access);
    assert!(access.fresh);
    let refresh = keys.decode(&result.refresh_token)?;
    assert_eq!(refresh.token_type, TokenType::Refresh);

    Ok(())
}

/// Tests login with an unknown email.
///
/// Expected: Err(AuthError::EmailNotFound)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = test_keys();

    let result = AuthService::new(db, &keys)
        .login(LoginParams {
            email: "nobody@example.com".to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::EmailNotFound(email))) if email == "nobody@example.com"
    ));

    Ok(())
}

/// Tests login of a soft-deleted user.
///
/// Expected: Err(AuthError::UserNotActive)
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = UserFactory::new(db).active(false).build().await?;
    let keys = test_keys();

    let result = AuthService::new(db, &keys)
        .login(LoginParams {
            email: user.email,
            password: DEFAULT_PASSWORD.to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotActive(_)))
    ));

    Ok(())
}

/// Tests login with a wrong password.
///
/// Expected: Err(AuthError::PasswordMismatch)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let keys = test_keys();

    let result = AuthService::new(db, &keys)
        .login(LoginParams {
            email: user.email,
            password: "Wr0ngPass!".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PasswordMismatch))
    ));

    Ok(())
}

/// Tests that logout revokes the token identifier.
///
/// Expected: jti present in the blocklist
#[tokio::test]
async fn logout_revokes_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let keys = test_keys();
    let claims = claims_for(user.id);

    AuthService::new(db, &keys).logout(&claims).await?;

    assert!(TokenBlocklistRepository::new(db).is_revoked(claims.jti).await?);

    Ok(())
}

/// Tests that refresh mints a non-fresh access token for the same identity.
///
/// Expected: access token with fresh=false and the same sub
#[tokio::test]
async fn refresh_issues_non_fresh_access_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = test_keys();
    let user_id = Uuid::new_v4();
    let refresh = Claims {
        token_type: TokenType::Refresh,
        fresh: false,
        ..claims_for(user_id)
    };

    let token = AuthService::new(db, &keys).refresh(&refresh)?;

    let claims = keys.decode(&token)?;
    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.token_type, TokenType::Access);
    assert!(!claims.fresh);

    Ok(())
}

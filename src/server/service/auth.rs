//! Login, logout and token refresh.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{token_blocklist::TokenBlocklistRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::auth::{Claims, LoginParams, LoginResult, TokenType},
    service::token::TokenKeys,
    util::password::verify_password,
};

/// Service issuing and revoking tokens for users.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub keys: &'a TokenKeys,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    pub fn new(db: &'a DatabaseConnection, keys: &'a TokenKeys) -> Self {
        Self { db, keys }
    }

    /// Verifies credentials and issues a fresh access token with a refresh token.
    ///
    /// # Returns
    /// - `Ok(LoginResult)` - Both tokens and the user's email
    /// - `Err(AuthError::EmailNotFound)` - No user with this email
    /// - `Err(AuthError::UserNotActive)` - User was soft-deleted
    /// - `Err(AuthError::PasswordMismatch)` - Wrong password
    pub async fn login(&self, params: LoginParams) -> Result<LoginResult, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_email(&params.email)
            .await?
            .ok_or_else(|| AuthError::EmailNotFound(params.email.clone()))?;

        if !user.is_active {
            return Err(AuthError::UserNotActive(user.email).into());
        }
        if !verify_password(&user.password, &params.password)? {
            return Err(AuthError::PasswordMismatch.into());
        }

        let access_token = self.keys.issue(user.id, TokenType::Access, true)?;
        let refresh_token = self.keys.issue(user.id, TokenType::Refresh, false)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginResult {
            access_token,
            refresh_token,
            email: user.email,
        })
    }

    /// Revokes the token the request was authenticated with.
    pub async fn logout(&self, claims: &Claims) -> Result<(), AppError> {
        TokenBlocklistRepository::new(self.db)
            .add(claims.jti)
            .await?;

        tracing::info!(user_id = %claims.sub, jti = %claims.jti, "Token revoked");

        Ok(())
    }

    /// Issues a non-fresh access token for the identity of a refresh token.
    pub fn refresh(&self, claims: &Claims) -> Result<String, AppError> {
        Ok(self.keys.issue(claims.sub, TokenType::Access, false)?)
    }
}

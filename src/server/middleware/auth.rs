use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::token_blocklist::TokenBlocklistRepository,
    error::{auth::AuthError, AppError},
    model::auth::{Claims, TokenType},
    service::token::TokenKeys,
};

/// Requirements an endpoint places on the presented token.
///
/// With no permissions a valid, unrevoked access token is enough.
pub enum Permission {
    /// Accept refresh tokens instead of access tokens.
    Refresh,
    /// Access token must come straight from a password login.
    Fresh,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    keys: &'a TokenKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a TokenKeys, headers: &'a HeaderMap) -> Self {
        Self { db, keys, headers }
    }

    /// Authenticates the request's bearer token.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid for this endpoint
    /// - `Err(AuthError::MissingAuthorizationHeader)` - No bearer token
    /// - `Err(AuthError::InvalidToken | TokenExpired)` - Token failed verification
    /// - `Err(AuthError::WrongTokenType)` - Access token where refresh is required, or the reverse
    /// - `Err(AuthError::TokenRevoked)` - Token was logged out
    /// - `Err(AuthError::FreshTokenRequired)` - Token was minted by a refresh
    pub async fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingAuthorizationHeader.into());
        };

        let claims = self.keys.decode(token).inspect_err(|e| {
            tracing::debug!("Rejected bearer token: {}", e);
        })?;

        let expected = if permissions
            .iter()
            .any(|p| matches!(p, Permission::Refresh))
        {
            TokenType::Refresh
        } else {
            TokenType::Access
        };
        if claims.token_type != expected {
            return Err(AuthError::WrongTokenType { expected }.into());
        }

        if TokenBlocklistRepository::new(self.db)
            .is_revoked(claims.jti)
            .await?
        {
            return Err(AuthError::TokenRevoked.into());
        }

        for permission in permissions {
            match permission {
                Permission::Refresh => {}
                Permission::Fresh => {
                    if !claims.fresh {
                        return Err(AuthError::FreshTokenRequired.into());
                    }
                }
            }
        }

        Ok(claims)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

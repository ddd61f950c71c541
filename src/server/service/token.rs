//! JWT issuing and decoding.
//!
//! Tokens are HS256-signed and carry [`Claims`]. Access tokens are short-lived and may be
//! *fresh* (issued by a password login); refresh tokens only mint new non-fresh access tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use uuid::Uuid;

use crate::server::{
    error::{auth::AuthError, internal::InternalError},
    model::auth::{Claims, TokenType},
};

/// Signing keys and lifetimes shared by every request.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenKeys {
    /// Derives both keys from one shared secret.
    pub fn from_secret(secret: &[u8], access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Signs a new token for `user_id` with a random `jti`.
    ///
    /// # Arguments
    /// - `user_id` - Identity stored in `sub`
    /// - `token_type` - Selects the lifetime
    /// - `fresh` - Only meaningful for access tokens
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(InternalError::TokenEncoding)` - Signing failed
    pub fn issue(
        &self,
        user_id: Uuid,
        token_type: TokenType,
        fresh: bool,
    ) -> Result<String, InternalError> {
        let ttl = match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        };
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            jti: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            token_type,
            fresh: fresh && token_type == TokenType::Access,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(
            |source| InternalError::TokenEncoding {
                token_type: token_type.to_string(),
                source,
            },
        )
    }

    /// Verifies the signature and expiry of a token and returns its claims.
    ///
    /// Type, freshness and revocation are checked by the caller.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }
}

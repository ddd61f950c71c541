//! Token claims and login parameters.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::auth::{LoginDto, LoginResponseDto, LoginUserDto},
    server::{error::auth::AuthError, util::validate::Validator},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access => f.write_str("access"),
            Self::Refresh => f.write_str("refresh"),
        }
    }
}

/// JWT claims carried by both access and refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued to.
    pub sub: Uuid,
    /// Unique token id, used for revocation.
    pub jti: Uuid,
    pub iat: i64,
    pub exp: i64,
    pub token_type: TokenType,
    /// Set only on access tokens issued directly by login.
    pub fresh: bool,
}

impl Claims {
    /// Fails unless the token identity is `user_id`.
    pub fn ensure_owner(&self, user_id: Uuid) -> Result<(), AuthError> {
        if self.sub == user_id {
            Ok(())
        } else {
            Err(AuthError::PermissionDenied(self.sub))
        }
    }
}

/// Tokens issued on successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub access_token: String,
    pub refresh_token: String,
    pub email: String,
}

impl LoginResult {
    pub fn into_dto(self) -> LoginResponseDto {
        LoginResponseDto {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            user: LoginUserDto { email: self.email },
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    /// Validates the login body.
    ///
    /// Only password length is checked here; strength rules apply at registration.
    pub fn from_dto(dto: LoginDto) -> Result<Self, crate::server::error::AppError> {
        let mut v = Validator::new();
        let email = v.require("email", dto.email);
        let password = v.require("password", dto.password);
        if let Some(email) = &email {
            v.email("email", email);
        }
        if let Some(password) = &password {
            v.password_length("password", password);
        }
        v.finish()?;

        Ok(Self {
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        })
    }
}

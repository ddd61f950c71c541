use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::{model::api::ErrorDto, server::model::auth::TokenType};

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing Authorization Header")]
    MissingAuthorizationHeader,

    /// Token could not be decoded or its signature is invalid.
    ///
    /// The reason is logged at debug level and never returned to the client.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token `exp` claim is in the past.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Token has expired")]
    TokenExpired,

    /// Token identifier is present in the blocklist.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("The token has been revoked.")]
    TokenRevoked,

    /// A refresh token was used where an access token is required, or the reverse.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Only {expected} tokens are allowed")]
    WrongTokenType {
        /// Token type the endpoint accepts
        expected: TokenType,
    },

    /// Endpoint requires an access token issued directly by login.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Fresh token required")]
    FreshTokenRequired,

    /// No user is registered with the supplied email.
    ///
    /// Results in a 404 Not Found response.
    #[error("User with <email={0}> Does Not Exist.")]
    EmailNotFound(String),

    /// The user exists but has been soft-deleted.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User with <email={0}> Is Not Active.")]
    UserNotActive(String),

    /// Supplied password does not verify against the stored hash.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Passwords Do Not Match.")]
    PasswordMismatch,

    /// Token identity does not own the resource it is acting on.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Permission Denied For User <id={0}>.")]
    PermissionDenied(Uuid),
}

/// Converts authentication errors into HTTP responses.
///
/// Token problems map to 401 Unauthorized, inactive users and ownership failures to
/// 403 Forbidden, unknown emails to 404 Not Found and password mismatches to 400 Bad Request.
/// Undecodable tokens are logged at debug level with their reason while the client
/// only sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingAuthorizationHeader
            | Self::TokenExpired
            | Self::TokenRevoked
            | Self::WrongTokenType { .. }
            | Self::FreshTokenRequired => StatusCode::UNAUTHORIZED,
            Self::InvalidToken(reason) => {
                tracing::debug!("Rejected token: {}", reason);
                return (StatusCode::UNAUTHORIZED, Json(ErrorDto::new("Invalid token")))
                    .into_response();
            }
            Self::EmailNotFound(_) => StatusCode::NOT_FOUND,
            Self::UserNotActive(_) | Self::PermissionDenied(_) => StatusCode::FORBIDDEN,
            Self::PasswordMismatch => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}

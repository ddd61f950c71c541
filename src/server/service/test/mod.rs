use chrono::Duration;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{
    error::{auth::AuthError, resource::ResourceError, AppError},
    model::auth::{Claims, TokenType},
    service::token::TokenKeys,
};

mod assignment;
mod auth;
mod position;
mod specialty;
mod teacher;

/// Fresh access-token claims for `user_id`.
fn claims_for(user_id: Uuid) -> Claims {
    Claims {
        sub: user_id,
        jti: Uuid::new_v4(),
        iat: 0,
        exp: i64::MAX,
        token_type: TokenType::Access,
        fresh: true,
    }
}

fn test_keys() -> TokenKeys {
    TokenKeys::from_secret(b"service-test-secret", Duration::minutes(15), Duration::days(30))
}

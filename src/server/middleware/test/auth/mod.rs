use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use uuid::Uuid;

use crate::server::{
    data::token_blocklist::TokenBlocklistRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::auth::TokenType,
    service::token::TokenKeys,
};
use test_utils::builder::TestBuilder;

mod require;

fn keys() -> TokenKeys {
    TokenKeys::from_secret(b"guard-test-secret", Duration::minutes(15), Duration::days(30))
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    );
    headers
}

use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ResponseDto},
        auth::{LoginDto, LoginResponseDto, RefreshResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::auth::LoginParams,
        service::auth::AuthService,
        state::AppState,
        util::extract::JsonBody,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// Issues a fresh access token and a refresh token.
///
/// # Returns
/// - `200 OK` - Tokens and the user's email
/// - `400 Bad Request` - Invalid body or wrong password
/// - `403 Forbidden` - User is not active
/// - `404 Not Found` - No user with this email
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ResponseDto<LoginResponseDto>),
        (status = 400, description = "Invalid body or wrong password", body = ErrorDto),
        (status = 403, description = "User is not active", body = ErrorDto),
        (status = 404, description = "Unknown email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = LoginParams::from_dto(payload)?;

    let result = AuthService::new(&state.db, &state.keys)
        .login(params)
        .await?;

    Ok(Json(ResponseDto::data(result.into_dto())))
}

/// Revoke the access token used for this request.
///
/// # Returns
/// - `200 OK` - Token revoked
/// - `401 Unauthorized` - Missing, invalid or already revoked token
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    AuthService::new(&state.db, &state.keys)
        .logout(&claims)
        .await?;

    Ok(Json(MessageDto::new("Successfully logged out")))
}

/// Exchange a refresh token for a new, non-fresh access token.
///
/// # Returns
/// - `200 OK` - New access token
/// - `401 Unauthorized` - Missing, invalid, revoked or non-refresh token
#[utoipa::path(
    post,
    path = "/auth/refresh",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "New access token", body = ResponseDto<RefreshResponseDto>),
        (status = 401, description = "Missing or invalid refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Permission::Refresh])
        .await?;

    let access_token = AuthService::new(&state.db, &state.keys).refresh(&claims)?;

    Ok(Json(ResponseDto::data(RefreshResponseDto { access_token })))
}

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ResponseDto},
        position::{CreatePositionDto, PositionDto, PositionListDto, UpdatePositionDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            kind::EntityKind,
            position::{CreatePositionParams, UpdatePositionParams},
        },
        service::position::PositionService,
        state::AppState,
        util::{extract::JsonBody, message},
    },
};

/// Tag for grouping position endpoints in OpenAPI documentation
pub static POSITION_TAG: &str = "positions";

/// Create a position.
///
/// # Access Control
/// - Any valid access token
///
/// # Returns
/// - `201 Created` - The new position
/// - `400 Bad Request` - Invalid body or name already taken
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/positions",
    tag = POSITION_TAG,
    security(("bearer_auth" = [])),
    request_body = CreatePositionDto,
    responses(
        (status = 201, description = "Position created", body = ResponseDto<PositionDto>),
        (status = 400, description = "Invalid body or duplicate name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_position(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreatePositionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let params = CreatePositionParams::from_dto(payload)?;
    let position = PositionService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::with_message(
            message::created(EntityKind::Position, position.id),
            position.into_dto(),
        )),
    ))
}

/// List positions with the teachers holding them.
#[utoipa::path(
    get,
    path = "/positions",
    tag = POSITION_TAG,
    responses(
        (status = 200, description = "All positions", body = ResponseDto<PositionListDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_positions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let positions = PositionService::new(&state.db).get_all().await?;

    Ok(Json(ResponseDto::data(PositionListDto {
        positions: positions.into_iter().map(|p| p.into_dto()).collect(),
    })))
}

#[utoipa::path(
    get,
    path = "/positions/{position_id}",
    tag = POSITION_TAG,
    params(("position_id" = Uuid, Path, description = "Position id")),
    responses(
        (status = 200, description = "Position", body = ResponseDto<PositionDto>),
        (status = 404, description = "Position not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_position(
    State(state): State<AppState>,
    Path(position_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let position = PositionService::new(&state.db).get(position_id).await?;

    Ok(Json(ResponseDto::data(position.into_dto())))
}

/// Rename a position.
#[utoipa::path(
    put,
    path = "/positions/{position_id}",
    tag = POSITION_TAG,
    security(("bearer_auth" = [])),
    params(("position_id" = Uuid, Path, description = "Position id")),
    request_body = UpdatePositionDto,
    responses(
        (status = 200, description = "Position updated", body = ResponseDto<PositionDto>),
        (status = 400, description = "Invalid body or duplicate name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Position not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_position(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(position_id): Path<Uuid>,
    JsonBody(payload): JsonBody<UpdatePositionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let params = UpdatePositionParams::from_dto(position_id, payload)?;
    let position = PositionService::new(&state.db).update(params).await?;

    Ok(Json(ResponseDto::with_message(
        message::updated(EntityKind::Position, position_id),
        position.into_dto(),
    )))
}

/// Delete a position; its teachers keep their accounts without a position.
#[utoipa::path(
    delete,
    path = "/positions/{position_id}",
    tag = POSITION_TAG,
    security(("bearer_auth" = [])),
    params(("position_id" = Uuid, Path, description = "Position id")),
    responses(
        (status = 200, description = "Position deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Position not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_position(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(position_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    PositionService::new(&state.db).delete(position_id).await?;

    Ok(Json(MessageDto::new(message::deleted(
        EntityKind::Position,
        position_id,
    ))))
}

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
        group::{CreateGroupDto, GroupDto, GroupListDto, UpdateGroupDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            kind::EntityKind,
            group::{CreateGroupParams, UpdateGroupParams},
        },
        service::group::GroupService,
        state::AppState,
        util::{extract::JsonBody, message},
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "groups";

/// Create a group, optionally with a curator and a specialty.
///
/// # Access Control
/// - Any valid access token
///
/// # Returns
/// - `201 Created` - The new group
/// - `400 Bad Request` - Invalid body or (name, year) already taken
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/groups",
    tag = GROUP_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Group created", body = ResponseDto<GroupDto>),
        (status = 400, description = "Invalid body, duplicate (name, year) or unknown specialty", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Referenced curator is not active", body = ErrorDto),
        (status = 404, description = "Referenced curator does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let params = CreateGroupParams::from_dto(payload)?;
    let group = GroupService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::with_message(
            message::created(EntityKind::Group, group.id),
            group.into_dto(),
        )),
    ))
}

/// List groups with their related summaries.
#[utoipa::path(
    get,
    path = "/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "All groups", body = ResponseDto<GroupListDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db).get_all().await?;

    Ok(Json(ResponseDto::data(GroupListDto {
        groups: groups.into_iter().map(|g| g.into_dto()).collect(),
    })))
}

#[utoipa::path(
    get,
    path = "/groups/{group_id}",
    tag = GROUP_TAG,
    params(("group_id" = Uuid, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group", body = ResponseDto<GroupDto>),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(group_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db).get(group_id).await?;

    Ok(Json(ResponseDto::data(group.into_dto())))
}

/// Apply a partial update to a group.
#[utoipa::path(
    put,
    path = "/groups/{group_id}",
    tag = GROUP_TAG,
    security(("bearer_auth" = [])),
    params(("group_id" = Uuid, Path, description = "Group id")),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Group updated", body = ResponseDto<GroupDto>),
        (status = 400, description = "Invalid body, duplicate (name, year) or unknown specialty", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Referenced curator is not active", body = ErrorDto),
        (status = 404, description = "Group or curator not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(group_id): Path<Uuid>,
    JsonBody(payload): JsonBody<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let params = UpdateGroupParams::from_dto(group_id, payload)?;
    let group = GroupService::new(&state.db).update(params).await?;

    Ok(Json(ResponseDto::with_message(
        message::updated(EntityKind::Group, group_id),
        group.into_dto(),
    )))
}

/// Delete a group together with its memberships.
#[utoipa::path(
    delete,
    path = "/groups/{group_id}",
    tag = GROUP_TAG,
    security(("bearer_auth" = [])),
    params(("group_id" = Uuid, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(group_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    GroupService::new(&state.db).delete(group_id).await?;

    Ok(Json(MessageDto::new(message::deleted(
        EntityKind::Group,
        group_id,
    ))))
}

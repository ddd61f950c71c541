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
        user::{CreateTeacherDto, TeacherDto, TeacherListDto, UpdateTeacherDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            kind::EntityKind,
            user::{CreateTeacherParams, UpdateTeacherParams},
        },
        service::teacher::TeacherService,
        state::AppState,
        util::{extract::JsonBody, message},
    },
};

/// Tag for grouping teacher endpoints in OpenAPI documentation
pub static TEACHER_TAG: &str = "teachers";

/// Register a teacher holding an existing position.
///
/// # Returns
/// - `201 Created` - The new teacher
/// - `400 Bad Request` - Invalid body, taken email or unconfirmed password
#[utoipa::path(
    post,
    path = "/users/teachers",
    tag = TEACHER_TAG,
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Teacher created", body = ResponseDto<TeacherDto>),
        (status = 400, description = "Invalid body, taken email, password mismatch or unknown position", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateTeacherDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateTeacherParams::from_dto(payload)?;

    let teacher = TeacherService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::with_message(
            message::created(EntityKind::Teacher, teacher.profile.id),
            teacher.into_dto(),
        )),
    ))
}

/// List active teachers.
#[utoipa::path(
    get,
    path = "/users/teachers",
    tag = TEACHER_TAG,
    responses(
        (status = 200, description = "Active teachers", body = ResponseDto<TeacherListDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teachers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let teachers = TeacherService::new(&state.db).get_all().await?;

    Ok(Json(ResponseDto::data(TeacherListDto {
        teachers: teachers.into_iter().map(|t| t.into_dto()).collect(),
    })))
}

/// Get an active teacher.
///
/// # Returns
/// - `200 OK` - The teacher with position, subjects and headed specialties
/// - `403 Forbidden` - Teacher is not active
/// - `404 Not Found` - No such teacher
#[utoipa::path(
    get,
    path = "/users/teachers/{teacher_id}",
    tag = TEACHER_TAG,
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Teacher", body = ResponseDto<TeacherDto>),
        (status = 403, description = "Teacher is not active", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = TeacherService::new(&state.db).get(teacher_id).await?;

    Ok(Json(ResponseDto::data(teacher.into_dto())))
}

/// Update the caller's own teacher account.
///
/// # Access Control
/// - `Fresh` - Access token issued by a password login
/// - Token identity must be `teacher_id`
#[utoipa::path(
    put,
    path = "/users/teachers/{teacher_id}",
    tag = TEACHER_TAG,
    security(("bearer_auth" = [])),
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated", body = ResponseDto<TeacherDto>),
        (status = 400, description = "Invalid body or taken email", body = ErrorDto),
        (status = 401, description = "Missing, invalid or non-fresh token", body = ErrorDto),
        (status = 403, description = "Not the owner or not active", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(teacher_id): Path<Uuid>,
    JsonBody(payload): JsonBody<UpdateTeacherDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Permission::Fresh])
        .await?;

    let params = UpdateTeacherParams::from_dto(teacher_id, payload)?;
    let teacher = TeacherService::new(&state.db)
        .update(&claims, params)
        .await?;

    Ok(Json(ResponseDto::with_message(
        message::updated(EntityKind::Teacher, teacher_id),
        teacher.into_dto(),
    )))
}

/// Deactivate the caller's own teacher account.
#[utoipa::path(
    delete,
    path = "/users/teachers/{teacher_id}",
    tag = TEACHER_TAG,
    security(("bearer_auth" = [])),
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Teacher deactivated", body = MessageDto),
        (status = 401, description = "Missing, invalid or non-fresh token", body = ErrorDto),
        (status = 403, description = "Not the owner or not active", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn soft_delete_teacher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(teacher_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Permission::Fresh])
        .await?;

    TeacherService::new(&state.db)
        .soft_delete(&claims, teacher_id)
        .await?;

    Ok(Json(MessageDto::new(message::deleted(
        EntityKind::Teacher,
        teacher_id,
    ))))
}

/// Permanently delete the caller's own teacher account.
#[utoipa::path(
    delete,
    path = "/users/teachers/{teacher_id}/hard",
    tag = TEACHER_TAG,
    security(("bearer_auth" = [])),
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Teacher deleted", body = MessageDto),
        (status = 401, description = "Missing, invalid or non-fresh token", body = ErrorDto),
        (status = 403, description = "Not the owner or not active", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn hard_delete_teacher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(teacher_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Permission::Fresh])
        .await?;

    TeacherService::new(&state.db)
        .hard_delete(&claims, teacher_id)
        .await?;

    Ok(Json(MessageDto::new(message::deleted(
        EntityKind::Teacher,
        teacher_id,
    ))))
}

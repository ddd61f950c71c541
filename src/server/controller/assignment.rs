use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ResponseDto},
        assignment::{AssignmentDto, AssignmentListDto, CreateAssignmentDto, UpdateAssignmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            assignment::{CreateAssignmentParams, UpdateAssignmentParams},
            kind::EntityKind,
        },
        service::assignment::AssignmentService,
        state::AppState,
        util::{extract::JsonBody, message},
    },
};

/// Tag for grouping assignment endpoints in OpenAPI documentation
pub static ASSIGNMENT_TAG: &str = "assignments";

/// List a subject's assignments ordered by name.
#[utoipa::path(
    get,
    path = "/subjects/{subject_id}/assignments",
    tag = ASSIGNMENT_TAG,
    params(("subject_id" = Uuid, Path, description = "Subject id")),
    responses(
        (status = 200, description = "Subject's assignments", body = ResponseDto<AssignmentListDto>),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assignments(
    State(state): State<AppState>,
    Path(subject_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let assignments = AssignmentService::new(&state.db)
        .get_all(subject_id)
        .await?;

    Ok(Json(ResponseDto::data(AssignmentListDto {
        assignments: assignments.into_iter().map(|a| a.into_dto()).collect(),
    })))
}

#[utoipa::path(
    get,
    path = "/subjects/{subject_id}/assignments/{assignment_id}",
    tag = ASSIGNMENT_TAG,
    params(
        ("subject_id" = Uuid, Path, description = "Subject id"),
        ("assignment_id" = Uuid, Path, description = "Assignment id")
    ),
    responses(
        (status = 200, description = "Assignment", body = ResponseDto<AssignmentDto>),
        (status = 404, description = "Subject not found or assignment not in subject", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assignment(
    State(state): State<AppState>,
    Path((subject_id, assignment_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let assignment = AssignmentService::new(&state.db)
        .get(subject_id, assignment_id)
        .await?;

    Ok(Json(ResponseDto::data(assignment.into_dto())))
}

/// Add an assignment to a subject the caller teaches.
///
/// # Access Control
/// - `Fresh` - Access token issued by a password login
/// - Token identity must be `teacher_id`, and the subject must be appointed to them
#[utoipa::path(
    post,
    path = "/users/teachers/{teacher_id}/subjects/{subject_id}/assignments",
    tag = ASSIGNMENT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher id"),
        ("subject_id" = Uuid, Path, description = "Subject id")
    ),
    request_body = CreateAssignmentDto,
    responses(
        (status = 201, description = "Assignment created", body = ResponseDto<AssignmentDto>),
        (status = 400, description = "Invalid body or duplicate name in subject", body = ErrorDto),
        (status = 401, description = "Missing, invalid or non-fresh token", body = ErrorDto),
        (status = 403, description = "Not the owner, not active, or subject not taught", body = ErrorDto),
        (status = 404, description = "Teacher or subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_assignment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((teacher_id, subject_id)): Path<(Uuid, Uuid)>,
    JsonBody(payload): JsonBody<CreateAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Permission::Fresh])
        .await?;

    let params = CreateAssignmentParams::from_dto(subject_id, payload, Utc::now())?;
    let assignment = AssignmentService::new(&state.db)
        .create(&claims, teacher_id, params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::with_message(
            message::created(EntityKind::Assignment, assignment.id),
            assignment.into_dto(),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/users/teachers/{teacher_id}/subjects/{subject_id}/assignments/{assignment_id}",
    tag = ASSIGNMENT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher id"),
        ("subject_id" = Uuid, Path, description = "Subject id"),
        ("assignment_id" = Uuid, Path, description = "Assignment id")
    ),
    request_body = UpdateAssignmentDto,
    responses(
        (status = 200, description = "Assignment updated", body = ResponseDto<AssignmentDto>),
        (status = 400, description = "Invalid body, duplicate name or subject_id supplied", body = ErrorDto),
        (status = 401, description = "Missing, invalid or non-fresh token", body = ErrorDto),
        (status = 403, description = "Not the owner, not active, or subject not taught", body = ErrorDto),
        (status = 404, description = "Teacher, subject or assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_assignment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((teacher_id, subject_id, assignment_id)): Path<(Uuid, Uuid, Uuid)>,
    JsonBody(payload): JsonBody<UpdateAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Permission::Fresh])
        .await?;

    let params = UpdateAssignmentParams::from_dto(assignment_id, subject_id, payload, Utc::now())?;
    let assignment = AssignmentService::new(&state.db)
        .update(&claims, teacher_id, params)
        .await?;

    Ok(Json(ResponseDto::with_message(
        message::updated(EntityKind::Assignment, assignment_id),
        assignment.into_dto(),
    )))
}

#[utoipa::path(
    delete,
    path = "/users/teachers/{teacher_id}/subjects/{subject_id}/assignments/{assignment_id}",
    tag = ASSIGNMENT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher id"),
        ("subject_id" = Uuid, Path, description = "Subject id"),
        ("assignment_id" = Uuid, Path, description = "Assignment id")
    ),
    responses(
        (status = 200, description = "Assignment deleted", body = MessageDto),
        (status = 401, description = "Missing, invalid or non-fresh token", body = ErrorDto),
        (status = 403, description = "Not the owner, not active, or subject not taught", body = ErrorDto),
        (status = 404, description = "Teacher, subject or assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_assignment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((teacher_id, subject_id, assignment_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Permission::Fresh])
        .await?;

    AssignmentService::new(&state.db)
        .delete(&claims, teacher_id, subject_id, assignment_id)
        .await?;

    Ok(Json(MessageDto::new(message::deleted(
        EntityKind::Assignment,
        assignment_id,
    ))))
}

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
        subject::{CreateSubjectDto, SubjectDto, SubjectListDto, UpdateSubjectDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            kind::EntityKind,
            subject::{CreateSubjectParams, UpdateSubjectParams},
        },
        service::subject::SubjectService,
        state::AppState,
        util::{extract::JsonBody, message},
    },
};

/// Tag for grouping subject endpoints in OpenAPI documentation
pub static SUBJECT_TAG: &str = "subjects";

/// List all subjects.
#[utoipa::path(
    get,
    path = "/subjects",
    tag = SUBJECT_TAG,
    responses(
        (status = 200, description = "All subjects", body = ResponseDto<SubjectListDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subjects(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let subjects = SubjectService::new(&state.db).get_all().await?;

    Ok(Json(ResponseDto::data(SubjectListDto {
        subjects: subjects.into_iter().map(|s| s.into_dto()).collect(),
    })))
}

#[utoipa::path(
    get,
    path = "/subjects/{subject_id}",
    tag = SUBJECT_TAG,
    params(("subject_id" = Uuid, Path, description = "Subject id")),
    responses(
        (status = 200, description = "Subject", body = ResponseDto<SubjectDto>),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subject(
    State(state): State<AppState>,
    Path(subject_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let subject = SubjectService::new(&state.db).get(subject_id).await?;

    Ok(Json(ResponseDto::data(subject.into_dto())))
}

/// List the subjects appointed to an active teacher.
#[utoipa::path(
    get,
    path = "/users/teachers/{teacher_id}/subjects",
    tag = SUBJECT_TAG,
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Teacher's subjects", body = ResponseDto<SubjectListDto>),
        (status = 403, description = "Teacher is not active", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher_subjects(
    State(state): State<AppState>,
    Path(teacher_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let subjects = SubjectService::new(&state.db)
        .teacher_subjects(teacher_id)
        .await?;

    Ok(Json(ResponseDto::data(SubjectListDto {
        subjects: subjects.into_iter().map(|s| s.into_dto()).collect(),
    })))
}

#[utoipa::path(
    get,
    path = "/users/teachers/{teacher_id}/subjects/{subject_id}",
    tag = SUBJECT_TAG,
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher id"),
        ("subject_id" = Uuid, Path, description = "Subject id")
    ),
    responses(
        (status = 200, description = "Subject", body = ResponseDto<SubjectDto>),
        (status = 403, description = "Teacher is not active", body = ErrorDto),
        (status = 404, description = "Teacher or subject not found, or not appointed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher_subject(
    State(state): State<AppState>,
    Path((teacher_id, subject_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let subject = SubjectService::new(&state.db)
        .get_teacher_subject(teacher_id, subject_id)
        .await?;

    Ok(Json(ResponseDto::data(subject.into_dto())))
}

/// Create a subject and appoint it to the caller.
///
/// # Access Control
/// - `Fresh` - Access token issued by a password login
/// - Token identity must be `teacher_id`
#[utoipa::path(
    post,
    path = "/users/teachers/{teacher_id}/subjects",
    tag = SUBJECT_TAG,
    security(("bearer_auth" = [])),
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = ResponseDto<SubjectDto>),
        (status = 400, description = "Invalid body or duplicate (name, year)", body = ErrorDto),
        (status = 401, description = "Missing, invalid or non-fresh token", body = ErrorDto),
        (status = 403, description = "Not the owner or not active", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_teacher_subject(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(teacher_id): Path<Uuid>,
    JsonBody(payload): JsonBody<CreateSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Permission::Fresh])
        .await?;

    let params = CreateSubjectParams::from_dto(payload)?;
    let subject = SubjectService::new(&state.db)
        .create_teacher_subject(&claims, teacher_id, params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::with_message(
            message::created(EntityKind::Subject, subject.id),
            subject.into_dto(),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/users/teachers/{teacher_id}/subjects/{subject_id}",
    tag = SUBJECT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher id"),
        ("subject_id" = Uuid, Path, description = "Subject id")
    ),
    request_body = UpdateSubjectDto,
    responses(
        (status = 200, description = "Subject updated", body = ResponseDto<SubjectDto>),
        (status = 400, description = "Invalid body or duplicate (name, year)", body = ErrorDto),
        (status = 401, description = "Missing, invalid or non-fresh token", body = ErrorDto),
        (status = 403, description = "Not the owner or not active", body = ErrorDto),
        (status = 404, description = "Teacher or subject not found, or not appointed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_teacher_subject(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((teacher_id, subject_id)): Path<(Uuid, Uuid)>,
    JsonBody(payload): JsonBody<UpdateSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Permission::Fresh])
        .await?;

    let params = UpdateSubjectParams::from_dto(subject_id, payload)?;
    let subject = SubjectService::new(&state.db)
        .update_teacher_subject(&claims, teacher_id, params)
        .await?;

    Ok(Json(ResponseDto::with_message(
        message::updated(EntityKind::Subject, subject_id),
        subject.into_dto(),
    )))
}

/// Delete a subject with its links and assignments.
#[utoipa::path(
    delete,
    path = "/users/teachers/{teacher_id}/subjects/{subject_id}",
    tag = SUBJECT_TAG,
    security(("bearer_auth" = [])),
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher id"),
        ("subject_id" = Uuid, Path, description = "Subject id")
    ),
    responses(
        (status = 200, description = "Subject deleted", body = MessageDto),
        (status = 401, description = "Missing, invalid or non-fresh token", body = ErrorDto),
        (status = 403, description = "Not the owner or not active", body = ErrorDto),
        (status = 404, description = "Teacher or subject not found, or not appointed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_teacher_subject(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((teacher_id, subject_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Permission::Fresh])
        .await?;

    SubjectService::new(&state.db)
        .delete_teacher_subject(&claims, teacher_id, subject_id)
        .await?;

    Ok(Json(MessageDto::new(message::deleted(
        EntityKind::Subject,
        subject_id,
    ))))
}

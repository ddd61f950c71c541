//! Appoint and disappoint endpoints for the many-to-many links between users, groups,
//! specialties and subjects.
//!
//! Every endpoint here requires an access token whose identity is `teacher_id`. Batch
//! endpoints are all-or-nothing: an unknown id or, on removal, an id that is not linked
//! rejects the whole request.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, ResponseDto},
        group::GroupDto,
        relation::{StudentIdsDto, SubjectIdsDto},
        specialty::SpecialtyDto,
        user::TeacherDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::relation::ItemIds,
        service::relation::RelationService,
        state::AppState,
        util::extract::JsonBody,
    },
};

/// Tag for grouping relation endpoints in OpenAPI documentation
pub static RELATION_TAG: &str = "relations";

/// Appoint one subject to the caller.
///
/// # Access Control
/// - Access token whose identity is `teacher_id`
///
/// # Returns
/// - `200 OK` - Message and the teacher with their subjects
/// - `403 Forbidden` - Caller is not the teacher
/// - `404 Not Found` - Teacher or subject does not exist
#[utoipa::path(
    post,
    path = "/users/teachers/{teacher_id}/subjects/{subject_id}/appoint",
    tag = RELATION_TAG,
    security(("bearer_auth" = [])),
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher id"),
        ("subject_id" = Uuid, Path, description = "Subject id")
    ),
    responses(
        (status = 200, description = "Subject appointed", body = ResponseDto<TeacherDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the teacher", body = ErrorDto),
        (status = 404, description = "Teacher or subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn appoint_teacher_subject(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((teacher_id, subject_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let appointment = RelationService::new(&state.db)
        .appoint_teacher_subject(&claims, teacher_id, subject_id)
        .await?;

    Ok(Json(ResponseDto::with_message(
        appointment.message,
        appointment.owner.into_dto(),
    )))
}

#[utoipa::path(
    delete,
    path = "/users/teachers/{teacher_id}/subjects/{subject_id}/appoint",
    tag = RELATION_TAG,
    security(("bearer_auth" = [])),
    params(
        ("teacher_id" = Uuid, Path, description = "Teacher id"),
        ("subject_id" = Uuid, Path, description = "Subject id")
    ),
    responses(
        (status = 200, description = "Subject disappointed", body = ResponseDto<TeacherDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the teacher", body = ErrorDto),
        (status = 404, description = "Teacher or subject not found, or not appointed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_teacher_subject(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((teacher_id, subject_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let appointment = RelationService::new(&state.db)
        .remove_teacher_subject(&claims, teacher_id, subject_id)
        .await?;

    Ok(Json(ResponseDto::with_message(
        appointment.message,
        appointment.owner.into_dto(),
    )))
}

/// Appoint a batch of subjects to the caller.
#[utoipa::path(
    post,
    path = "/users/teachers/{teacher_id}/subjects/appoint",
    tag = RELATION_TAG,
    security(("bearer_auth" = [])),
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    request_body = SubjectIdsDto,
    responses(
        (status = 200, description = "Subjects appointed", body = ResponseDto<TeacherDto>),
        (status = 400, description = "Missing or empty subject_ids", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the teacher", body = ErrorDto),
        (status = 404, description = "Teacher or some subjects not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn appoint_teacher_subjects(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(teacher_id): Path<Uuid>,
    JsonBody(payload): JsonBody<SubjectIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let ids = ItemIds::from_subjects(payload)?;
    let appointment = RelationService::new(&state.db)
        .appoint_teacher_subjects(&claims, teacher_id, ids)
        .await?;

    Ok(Json(ResponseDto::with_message(
        appointment.message,
        appointment.owner.into_dto(),
    )))
}

#[utoipa::path(
    delete,
    path = "/users/teachers/{teacher_id}/subjects/appoint",
    tag = RELATION_TAG,
    security(("bearer_auth" = [])),
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    request_body = SubjectIdsDto,
    responses(
        (status = 200, description = "Subjects disappointed", body = ResponseDto<TeacherDto>),
        (status = 400, description = "Missing or empty subject_ids", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the teacher", body = ErrorDto),
        (status = 404, description = "Teacher or some subjects not found, or not appointed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_teacher_subjects(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(teacher_id): Path<Uuid>,
    JsonBody(payload): JsonBody<SubjectIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let ids = ItemIds::from_subjects(payload)?;
    let appointment = RelationService::new(&state.db)
        .remove_teacher_subjects(&claims, teacher_id, ids)
        .await?;

    Ok(Json(ResponseDto::with_message(
        appointment.message,
        appointment.owner.into_dto(),
    )))
}

/// Enroll students in a group curated by the caller.
///
/// # Access Control
/// - Access token whose identity is `teacher_id`
/// - The caller must be the group's curator
#[utoipa::path(
    post,
    path = "/users/teachers/{teacher_id}/groups/{group_id}/students",
    tag = RELATION_TAG,
    security(("bearer_auth" = [])),
    params(
        ("teacher_id" = Uuid, Path, description = "Curator id"),
        ("group_id" = Uuid, Path, description = "Group id")
    ),
    request_body = StudentIdsDto,
    responses(
        (status = 200, description = "Students enrolled", body = ResponseDto<GroupDto>),
        (status = 400, description = "Missing or empty student_ids", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the group's curator", body = ErrorDto),
        (status = 404, description = "Group or some students not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn appoint_group_students(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((teacher_id, group_id)): Path<(Uuid, Uuid)>,
    JsonBody(payload): JsonBody<StudentIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let ids = ItemIds::from_students(payload)?;
    let appointment = RelationService::new(&state.db)
        .appoint_group_students(&claims, teacher_id, group_id, ids)
        .await?;

    Ok(Json(ResponseDto::with_message(
        appointment.message,
        appointment.owner.into_dto(),
    )))
}

#[utoipa::path(
    delete,
    path = "/users/teachers/{teacher_id}/groups/{group_id}/students",
    tag = RELATION_TAG,
    security(("bearer_auth" = [])),
    params(
        ("teacher_id" = Uuid, Path, description = "Curator id"),
        ("group_id" = Uuid, Path, description = "Group id")
    ),
    request_body = StudentIdsDto,
    responses(
        (status = 200, description = "Students removed", body = ResponseDto<GroupDto>),
        (status = 400, description = "Missing or empty student_ids", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the group's curator", body = ErrorDto),
        (status = 404, description = "Group or some students not found, or not enrolled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_group_students(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((teacher_id, group_id)): Path<(Uuid, Uuid)>,
    JsonBody(payload): JsonBody<StudentIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let ids = ItemIds::from_students(payload)?;
    let appointment = RelationService::new(&state.db)
        .remove_group_students(&claims, teacher_id, group_id, ids)
        .await?;

    Ok(Json(ResponseDto::with_message(
        appointment.message,
        appointment.owner.into_dto(),
    )))
}

#[utoipa::path(
    post,
    path = "/users/teachers/{teacher_id}/groups/{group_id}/subjects",
    tag = RELATION_TAG,
    security(("bearer_auth" = [])),
    params(
        ("teacher_id" = Uuid, Path, description = "Curator id"),
        ("group_id" = Uuid, Path, description = "Group id")
    ),
    request_body = SubjectIdsDto,
    responses(
        (status = 200, description = "Subjects added to the group", body = ResponseDto<GroupDto>),
        (status = 400, description = "Missing or empty subject_ids", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the group's curator", body = ErrorDto),
        (status = 404, description = "Group or some subjects not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn appoint_group_subjects(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((teacher_id, group_id)): Path<(Uuid, Uuid)>,
    JsonBody(payload): JsonBody<SubjectIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let ids = ItemIds::from_subjects(payload)?;
    let appointment = RelationService::new(&state.db)
        .appoint_group_subjects(&claims, teacher_id, group_id, ids)
        .await?;

    Ok(Json(ResponseDto::with_message(
        appointment.message,
        appointment.owner.into_dto(),
    )))
}

#[utoipa::path(
    delete,
    path = "/users/teachers/{teacher_id}/groups/{group_id}/subjects",
    tag = RELATION_TAG,
    security(("bearer_auth" = [])),
    params(
        ("teacher_id" = Uuid, Path, description = "Curator id"),
        ("group_id" = Uuid, Path, description = "Group id")
    ),
    request_body = SubjectIdsDto,
    responses(
        (status = 200, description = "Subjects removed from the group", body = ResponseDto<GroupDto>),
        (status = 400, description = "Missing or empty subject_ids", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the group's curator", body = ErrorDto),
        (status = 404, description = "Group or some subjects not found, or not linked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_group_subjects(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((teacher_id, group_id)): Path<(Uuid, Uuid)>,
    JsonBody(payload): JsonBody<SubjectIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let ids = ItemIds::from_subjects(payload)?;
    let appointment = RelationService::new(&state.db)
        .remove_group_subjects(&claims, teacher_id, group_id, ids)
        .await?;

    Ok(Json(ResponseDto::with_message(
        appointment.message,
        appointment.owner.into_dto(),
    )))
}

/// Add subjects to a specialty headed by the caller.
///
/// # Access Control
/// - Access token whose identity is `teacher_id`
/// - The caller must be the specialty's head
#[utoipa::path(
    post,
    path = "/users/teachers/{teacher_id}/specialties/{specialty_id}/subjects",
    tag = RELATION_TAG,
    security(("bearer_auth" = [])),
    params(
        ("teacher_id" = Uuid, Path, description = "Head teacher id"),
        ("specialty_id" = Uuid, Path, description = "Specialty id")
    ),
    request_body = SubjectIdsDto,
    responses(
        (status = 200, description = "Subjects added to the specialty", body = ResponseDto<SpecialtyDto>),
        (status = 400, description = "Missing or empty subject_ids", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the specialty's head", body = ErrorDto),
        (status = 404, description = "Specialty or some subjects not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn appoint_specialty_subjects(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((teacher_id, specialty_id)): Path<(Uuid, Uuid)>,
    JsonBody(payload): JsonBody<SubjectIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let ids = ItemIds::from_subjects(payload)?;
    let appointment = RelationService::new(&state.db)
        .appoint_specialty_subjects(&claims, teacher_id, specialty_id, ids)
        .await?;

    Ok(Json(ResponseDto::with_message(
        appointment.message,
        appointment.owner.into_dto(),
    )))
}

#[utoipa::path(
    delete,
    path = "/users/teachers/{teacher_id}/specialties/{specialty_id}/subjects",
    tag = RELATION_TAG,
    security(("bearer_auth" = [])),
    params(
        ("teacher_id" = Uuid, Path, description = "Head teacher id"),
        ("specialty_id" = Uuid, Path, description = "Specialty id")
    ),
    request_body = SubjectIdsDto,
    responses(
        (status = 200, description = "Subjects removed from the specialty", body = ResponseDto<SpecialtyDto>),
        (status = 400, description = "Missing or empty subject_ids", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the specialty's head", body = ErrorDto),
        (status = 404, description = "Specialty or some subjects not found, or not linked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_specialty_subjects(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((teacher_id, specialty_id)): Path<(Uuid, Uuid)>,
    JsonBody(payload): JsonBody<SubjectIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let ids = ItemIds::from_subjects(payload)?;
    let appointment = RelationService::new(&state.db)
        .remove_specialty_subjects(&claims, teacher_id, specialty_id, ids)
        .await?;

    Ok(Json(ResponseDto::with_message(
        appointment.message,
        appointment.owner.into_dto(),
    )))
}

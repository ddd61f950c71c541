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
        user::{CreateStudentDto, StudentDto, StudentListDto, UpdateStudentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            kind::EntityKind,
            user::{CreateStudentParams, UpdateStudentParams},
        },
        service::student::StudentService,
        state::AppState,
        util::{extract::JsonBody, message},
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "students";

/// Register a student.
///
/// # Returns
/// - `201 Created` - The new student
/// - `400 Bad Request` - Invalid body, taken email or unconfirmed password
#[utoipa::path(
    post,
    path = "/users/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = ResponseDto<StudentDto>),
        (status = 400, description = "Invalid body, taken email or password mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateStudentParams::from_dto(payload)?;

    let student = StudentService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::with_message(
            message::created(EntityKind::Student, student.profile.id),
            student.into_dto(),
        )),
    ))
}

/// List active students.
#[utoipa::path(
    get,
    path = "/users/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Active students", body = ResponseDto<StudentListDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all().await?;

    Ok(Json(ResponseDto::data(StudentListDto {
        students: students.into_iter().map(|s| s.into_dto()).collect(),
    })))
}

/// Get an active student.
///
/// # Returns
/// - `200 OK` - The student with their groups
/// - `403 Forbidden` - Student is not active
/// - `404 Not Found` - No such student
#[utoipa::path(
    get,
    path = "/users/students/{student_id}",
    tag = STUDENT_TAG,
    params(("student_id" = Uuid, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student", body = ResponseDto<StudentDto>),
        (status = 403, description = "Student is not active", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get(student_id).await?;

    Ok(Json(ResponseDto::data(student.into_dto())))
}

/// Update the caller's own student account.
///
/// # Access Control
/// - `Fresh` - Access token issued by a password login
/// - Token identity must be `student_id`
#[utoipa::path(
    put,
    path = "/users/students/{student_id}",
    tag = STUDENT_TAG,
    security(("bearer_auth" = [])),
    params(("student_id" = Uuid, Path, description = "Student id")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated", body = ResponseDto<StudentDto>),
        (status = 400, description = "Invalid body or taken email", body = ErrorDto),
        (status = 401, description = "Missing, invalid or non-fresh token", body = ErrorDto),
        (status = 403, description = "Not the owner or not active", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(student_id): Path<Uuid>,
    JsonBody(payload): JsonBody<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Permission::Fresh])
        .await?;

    let params = UpdateStudentParams::from_dto(student_id, payload)?;
    let student = StudentService::new(&state.db)
        .update(&claims, params)
        .await?;

    Ok(Json(ResponseDto::with_message(
        message::updated(EntityKind::Student, student_id),
        student.into_dto(),
    )))
}

/// Deactivate the caller's own student account.
#[utoipa::path(
    delete,
    path = "/users/students/{student_id}",
    tag = STUDENT_TAG,
    security(("bearer_auth" = [])),
    params(("student_id" = Uuid, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student deactivated", body = MessageDto),
        (status = 401, description = "Missing, invalid or non-fresh token", body = ErrorDto),
        (status = 403, description = "Not the owner or not active", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn soft_delete_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(student_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Permission::Fresh])
        .await?;

    StudentService::new(&state.db)
        .soft_delete(&claims, student_id)
        .await?;

    Ok(Json(MessageDto::new(message::deleted(
        EntityKind::Student,
        student_id,
    ))))
}

/// Permanently delete the caller's own student account.
#[utoipa::path(
    delete,
    path = "/users/students/{student_id}/hard",
    tag = STUDENT_TAG,
    security(("bearer_auth" = [])),
    params(("student_id" = Uuid, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student deleted", body = MessageDto),
        (status = 401, description = "Missing, invalid or non-fresh token", body = ErrorDto),
        (status = 403, description = "Not the owner or not active", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn hard_delete_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(student_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Permission::Fresh])
        .await?;

    StudentService::new(&state.db)
        .hard_delete(&claims, student_id)
        .await?;

    Ok(Json(MessageDto::new(message::deleted(
        EntityKind::Student,
        student_id,
    ))))
}

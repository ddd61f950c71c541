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
        specialty::{CreateSpecialtyDto, SpecialtyDto, SpecialtyListDto, UpdateSpecialtyDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            kind::EntityKind,
            specialty::{CreateSpecialtyParams, UpdateSpecialtyParams},
        },
        service::specialty::SpecialtyService,
        state::AppState,
        util::{extract::JsonBody, message},
    },
};

/// Tag for grouping specialty endpoints in OpenAPI documentation
pub static SPECIALTY_TAG: &str = "specialties";

/// Create a specialty, optionally headed by a teacher.
///
/// # Access Control
/// - Any valid access token
///
/// # Returns
/// - `201 Created` - The new specialty
/// - `400 Bad Request` - Invalid body or (name, year) already taken
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/specialties",
    tag = SPECIALTY_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateSpecialtyDto,
    responses(
        (status = 201, description = "Specialty created", body = ResponseDto<SpecialtyDto>),
        (status = 400, description = "Invalid body or duplicate (name, year)", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Referenced head teacher is not active", body = ErrorDto),
        (status = 404, description = "Referenced head teacher does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_specialty(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreateSpecialtyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let params = CreateSpecialtyParams::from_dto(payload)?;
    let specialty = SpecialtyService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::with_message(
            message::created(EntityKind::Specialty, specialty.id),
            specialty.into_dto(),
        )),
    ))
}

/// List specialties with their related summaries.
#[utoipa::path(
    get,
    path = "/specialties",
    tag = SPECIALTY_TAG,
    responses(
        (status = 200, description = "All specialties", body = ResponseDto<SpecialtyListDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_specialties(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let specialties = SpecialtyService::new(&state.db).get_all().await?;

    Ok(Json(ResponseDto::data(SpecialtyListDto {
        specialties: specialties.into_iter().map(|s| s.into_dto()).collect(),
    })))
}

#[utoipa::path(
    get,
    path = "/specialties/{specialty_id}",
    tag = SPECIALTY_TAG,
    params(("specialty_id" = Uuid, Path, description = "Specialty id")),
    responses(
        (status = 200, description = "Specialty", body = ResponseDto<SpecialtyDto>),
        (status = 404, description = "Specialty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_specialty(
    State(state): State<AppState>,
    Path(specialty_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let specialty = SpecialtyService::new(&state.db).get(specialty_id).await?;

    Ok(Json(ResponseDto::data(specialty.into_dto())))
}

/// Apply a partial update to a specialty.
#[utoipa::path(
    put,
    path = "/specialties/{specialty_id}",
    tag = SPECIALTY_TAG,
    security(("bearer_auth" = [])),
    params(("specialty_id" = Uuid, Path, description = "Specialty id")),
    request_body = UpdateSpecialtyDto,
    responses(
        (status = 200, description = "Specialty updated", body = ResponseDto<SpecialtyDto>),
        (status = 400, description = "Invalid body or duplicate (name, year)", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Referenced head teacher is not active", body = ErrorDto),
        (status = 404, description = "Specialty or head teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_specialty(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(specialty_id): Path<Uuid>,
    JsonBody(payload): JsonBody<UpdateSpecialtyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    let params = UpdateSpecialtyParams::from_dto(specialty_id, payload)?;
    let specialty = SpecialtyService::new(&state.db).update(params).await?;

    Ok(Json(ResponseDto::with_message(
        message::updated(EntityKind::Specialty, specialty_id),
        specialty.into_dto(),
    )))
}

/// Delete a specialty; its groups are kept without a specialty.
#[utoipa::path(
    delete,
    path = "/specialties/{specialty_id}",
    tag = SPECIALTY_TAG,
    security(("bearer_auth" = [])),
    params(("specialty_id" = Uuid, Path, description = "Specialty id")),
    responses(
        (status = 200, description = "Specialty deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Specialty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_specialty(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(specialty_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    SpecialtyService::new(&state.db).delete(specialty_id).await?;

    Ok(Json(MessageDto::new(message::deleted(
        EntityKind::Specialty,
        specialty_id,
    ))))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        blood_type::{BloodTypeDto, CreateBloodTypeDto, UpdateBloodTypeDto},
    },
    server::{
        error::AppError,
        model::blood_type::{CreateBloodTypeParam, UpdateBloodTypeParam},
        service::blood_type::BloodTypeService,
        state::AppState,
    },
};

/// Tag for grouping blood type endpoints in OpenAPI documentation
pub static BLOOD_TYPE_TAG: &str = "blood-type";

/// Create a blood type.
///
/// # Returns
/// - `201 Created` - Successfully created blood type
/// - `400 Bad Request` - Blank or duplicate name
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/blood-types",
    tag = BLOOD_TYPE_TAG,
    request_body = CreateBloodTypeDto,
    responses(
        (status = 201, description = "Successfully created blood type", body = BloodTypeDto),
        (status = 400, description = "Invalid blood type data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_blood_type(
    State(state): State<AppState>,
    Json(payload): Json<CreateBloodTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let blood_type = BloodTypeService::new(&state.store)
        .create(CreateBloodTypeParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(blood_type.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/blood-types",
    tag = BLOOD_TYPE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved blood types", body = Vec<BloodTypeDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_blood_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let blood_types = BloodTypeService::new(&state.store).list().await?;

    Ok(Json(
        blood_types
            .into_iter()
            .map(|b| b.into_dto())
            .collect::<Vec<BloodTypeDto>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/blood-types/{id}",
    tag = BLOOD_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Blood type ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved blood type", body = BloodTypeDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Blood type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_blood_type_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let blood_type = BloodTypeService::new(&state.store).get_by_id(id).await?;

    Ok(Json(blood_type.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/blood-types/{id}",
    tag = BLOOD_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Blood type ID")
    ),
    request_body = UpdateBloodTypeDto,
    responses(
        (status = 200, description = "Successfully renamed blood type", body = BloodTypeDto),
        (status = 400, description = "Blank or duplicate name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Blood type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_blood_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBloodTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let blood_type = BloodTypeService::new(&state.store)
        .update(id, UpdateBloodTypeParam::from_dto(payload))
        .await?;

    Ok(Json(blood_type.into_dto()))
}

/// Delete a blood type.
///
/// Refused with `409 Conflict` while any donor has this blood type.
#[utoipa::path(
    delete,
    path = "/api/blood-types/{id}",
    tag = BLOOD_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Blood type ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted blood type"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Blood type not found", body = ErrorDto),
        (status = 409, description = "Blood type is assigned to donors", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_blood_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    BloodTypeService::new(&state.store).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

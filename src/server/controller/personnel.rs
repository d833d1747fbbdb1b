use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        personnel::{CreatePersonnelDto, PersonnelDto, UpdatePersonnelDto},
    },
    server::{
        error::AppError,
        model::personnel::{CreatePersonnelParam, UpdatePersonnelParam},
        service::personnel::PersonnelService,
        state::AppState,
    },
};

/// Tag for grouping personnel endpoints in OpenAPI documentation
pub static PERSONNEL_TAG: &str = "personnel";

/// Create a personnel account.
///
/// The password is hashed with a fresh salt before it is stored. Responses never
/// include password material.
///
/// # Access Control
/// - Bearer token
///
/// # Returns
/// - `201 Created` - Successfully created account
/// - `400 Bad Request` - Invalid or duplicate PESEL, blank name, short password
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/personnel",
    tag = PERSONNEL_TAG,
    request_body = CreatePersonnelDto,
    responses(
        (status = 201, description = "Successfully created personnel account", body = PersonnelDto),
        (status = 400, description = "Invalid personnel data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_personnel(
    State(state): State<AppState>,
    Json(payload): Json<CreatePersonnelDto>,
) -> Result<impl IntoResponse, AppError> {
    let personnel = PersonnelService::new(&state.store, &state.encrypter)
        .create(CreatePersonnelParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(personnel.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/personnel",
    tag = PERSONNEL_TAG,
    responses(
        (status = 200, description = "Successfully retrieved personnel", body = Vec<PersonnelDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_personnel(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let personnel = PersonnelService::new(&state.store, &state.encrypter)
        .list()
        .await?;

    Ok(Json(
        personnel
            .into_iter()
            .map(|p| p.into_dto())
            .collect::<Vec<PersonnelDto>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/personnel/{id}",
    tag = PERSONNEL_TAG,
    params(
        ("id" = i32, Path, description = "Personnel ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved personnel account", body = PersonnelDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Personnel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_personnel_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let personnel = PersonnelService::new(&state.store, &state.encrypter)
        .get_by_id(id)
        .await?;

    Ok(Json(personnel.into_dto()))
}

/// Update a personnel account.
///
/// Names are always replaced; the password only when one is given.
#[utoipa::path(
    put,
    path = "/api/personnel/{id}",
    tag = PERSONNEL_TAG,
    params(
        ("id" = i32, Path, description = "Personnel ID")
    ),
    request_body = UpdatePersonnelDto,
    responses(
        (status = 200, description = "Successfully updated personnel account", body = PersonnelDto),
        (status = 400, description = "Invalid personnel data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Personnel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_personnel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePersonnelDto>,
) -> Result<impl IntoResponse, AppError> {
    let personnel = PersonnelService::new(&state.store, &state.encrypter)
        .update(id, UpdatePersonnelParam::from_dto(payload))
        .await?;

    Ok(Json(personnel.into_dto()))
}

/// Delete a personnel account.
///
/// Refused with `409 Conflict` while donations recorded by this account exist.
#[utoipa::path(
    delete,
    path = "/api/personnel/{id}",
    tag = PERSONNEL_TAG,
    params(
        ("id" = i32, Path, description = "Personnel ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted personnel account"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Personnel not found", body = ErrorDto),
        (status = 409, description = "Account has recorded donations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_personnel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PersonnelService::new(&state.store, &state.encrypter)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

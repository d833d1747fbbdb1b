use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        donor::{CreateDonorDto, DonorDto, UpdateDonorDto},
    },
    server::{
        error::AppError,
        model::donor::{CreateDonorParam, UpdateDonorParam},
        service::donor::DonorService,
        state::AppState,
    },
};

/// Tag for grouping donor endpoints in OpenAPI documentation
pub static DONOR_TAG: &str = "donor";

/// Register a new donor.
///
/// Creates a donor identified by PESEL. The PESEL must carry a valid check digit
/// and must not belong to another donor; the blood type must exist.
///
/// # Access Control
/// - Bearer token
///
/// # Arguments
/// - `state` - Application state containing the store
/// - `payload` - Donor data
///
/// # Returns
/// - `201 Created` - Successfully registered donor
/// - `400 Bad Request` - Invalid or duplicate PESEL, blank name, unknown blood type
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/donors",
    tag = DONOR_TAG,
    request_body = CreateDonorDto,
    responses(
        (status = 201, description = "Successfully registered donor", body = DonorDto),
        (status = 400, description = "Invalid donor data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_donor(
    State(state): State<AppState>,
    Json(payload): Json<CreateDonorDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DonorService::new(&state.store);

    let donor = service.create(CreateDonorParam::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(donor.into_dto())))
}

/// List all donors ordered by ID.
#[utoipa::path(
    get,
    path = "/api/donors",
    tag = DONOR_TAG,
    responses(
        (status = 200, description = "Successfully retrieved donors", body = Vec<DonorDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_donors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let donors = DonorService::new(&state.store).list().await?;

    Ok(Json(
        donors
            .into_iter()
            .map(|d| d.into_dto())
            .collect::<Vec<DonorDto>>(),
    ))
}

/// Get a donor by ID.
#[utoipa::path(
    get,
    path = "/api/donors/{id}",
    tag = DONOR_TAG,
    params(
        ("id" = i32, Path, description = "Donor ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved donor", body = DonorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Donor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_donor_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let donor = DonorService::new(&state.store).get_by_id(id).await?;

    Ok(Json(donor.into_dto()))
}

/// Get a donor by PESEL.
///
/// # Returns
/// - `200 OK` - Donor with the given PESEL
/// - `400 Bad Request` - Malformed PESEL
/// - `404 Not Found` - No donor with that PESEL
#[utoipa::path(
    get,
    path = "/api/donors/pesel/{pesel}",
    tag = DONOR_TAG,
    params(
        ("pesel" = String, Path, description = "Donor PESEL")
    ),
    responses(
        (status = 200, description = "Successfully retrieved donor", body = DonorDto),
        (status = 400, description = "Malformed PESEL", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Donor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_donor_by_pesel(
    State(state): State<AppState>,
    Path(pesel): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let donor = DonorService::new(&state.store)
        .get_by_pesel(pesel.trim())
        .await?;

    Ok(Json(donor.into_dto()))
}

/// Update a donor.
///
/// Replaces the donor's mutable fields. The PESEL cannot be changed.
#[utoipa::path(
    put,
    path = "/api/donors/{id}",
    tag = DONOR_TAG,
    params(
        ("id" = i32, Path, description = "Donor ID")
    ),
    request_body = UpdateDonorDto,
    responses(
        (status = 200, description = "Successfully updated donor", body = DonorDto),
        (status = 400, description = "Invalid donor data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Donor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_donor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDonorDto>,
) -> Result<impl IntoResponse, AppError> {
    let donor = DonorService::new(&state.store)
        .update(id, UpdateDonorParam::from_dto(payload))
        .await?;

    Ok(Json(donor.into_dto()))
}

/// Delete a donor.
///
/// The donor's recorded donations are deleted with them.
///
/// # Returns
/// - `204 No Content` - Donor deleted
/// - `404 Not Found` - Donor does not exist
#[utoipa::path(
    delete,
    path = "/api/donors/{id}",
    tag = DONOR_TAG,
    params(
        ("id" = i32, Path, description = "Donor ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted donor"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Donor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_donor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    DonorService::new(&state.store).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        blood_donation::{BloodDonationDto, CreateBloodDonationDto, UpdateBloodDonationDto},
    },
    server::{
        error::AppError,
        model::blood_donation::{CreateBloodDonationParam, UpdateBloodDonationParam},
        service::blood_donation::BloodDonationService,
        state::AppState,
    },
};

/// Tag for grouping donation endpoints in OpenAPI documentation
pub static DONATION_TAG: &str = "donation";

/// Record a blood donation.
///
/// Records a donation of `volume_ml` millilitres taken from a donor by a member of
/// personnel at `donated_at`.
///
/// # Access Control
/// - Bearer token
///
/// # Returns
/// - `201 Created` - Successfully recorded donation
/// - `400 Bad Request` - Non-positive volume, or unknown donor or personnel
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/donations",
    tag = DONATION_TAG,
    request_body = CreateBloodDonationDto,
    responses(
        (status = 201, description = "Successfully recorded donation", body = BloodDonationDto),
        (status = 400, description = "Invalid donation data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_donation(
    State(state): State<AppState>,
    Json(payload): Json<CreateBloodDonationDto>,
) -> Result<impl IntoResponse, AppError> {
    let donation = BloodDonationService::new(&state.store)
        .create(CreateBloodDonationParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(donation.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/donations",
    tag = DONATION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved donations", body = Vec<BloodDonationDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_donations(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let donations = BloodDonationService::new(&state.store).list().await?;

    Ok(Json(
        donations
            .into_iter()
            .map(|d| d.into_dto())
            .collect::<Vec<BloodDonationDto>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/donations/{id}",
    tag = DONATION_TAG,
    params(
        ("id" = i32, Path, description = "Donation ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved donation", body = BloodDonationDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Donation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_donation_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let donation = BloodDonationService::new(&state.store).get_by_id(id).await?;

    Ok(Json(donation.into_dto()))
}

/// Correct the date or volume of a donation.
#[utoipa::path(
    put,
    path = "/api/donations/{id}",
    tag = DONATION_TAG,
    params(
        ("id" = i32, Path, description = "Donation ID")
    ),
    request_body = UpdateBloodDonationDto,
    responses(
        (status = 200, description = "Successfully updated donation", body = BloodDonationDto),
        (status = 400, description = "Non-positive volume", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Donation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_donation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBloodDonationDto>,
) -> Result<impl IntoResponse, AppError> {
    let donation = BloodDonationService::new(&state.store)
        .update(id, UpdateBloodDonationParam::from_dto(payload))
        .await?;

    Ok(Json(donation.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/donations/{id}",
    tag = DONATION_TAG,
    params(
        ("id" = i32, Path, description = "Donation ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted donation"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Donation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_donation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    BloodDonationService::new(&state.store).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

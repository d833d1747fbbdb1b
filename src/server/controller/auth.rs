use axum::{extract::State, response::IntoResponse, Extension, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, PrincipalDto, TokenDto},
    },
    server::{
        auth::Principal, error::AppError, model::personnel::LoginParam,
        service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with PESEL and password.
///
/// Exchanges personnel credentials for a bearer token. Unknown PESELs and wrong
/// passwords receive the same response.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Signed token and its expiry
/// - `401 Unauthorized` - Invalid credentials
/// - `500 Internal Server Error` - Database or signing error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = TokenDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.store, &state.encrypter, &state.issuer);

    let token = service.login(LoginParam::from_dto(payload)).await?;

    Ok(Json(TokenDto {
        token: token.value,
        expires_at: token.expires_at,
    }))
}

/// Get the authenticated principal.
///
/// Returns the identity carried by the caller's bearer token.
///
/// # Access Control
/// - Bearer token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated principal", body = PrincipalDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn me(Extension(principal): Extension<Principal>) -> impl IntoResponse {
    Json(PrincipalDto {
        subject: principal.subject,
        issuer: principal.issuer,
        expires_at: principal.expires_at,
        role: principal.role,
    })
}

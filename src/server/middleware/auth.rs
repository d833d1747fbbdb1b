//! Bearer token guard for protected routes.
//!
//! [`require_auth`] runs before every protected handler. It validates the
//! `Authorization: Bearer <token>` header with the shared
//! [`CredentialValidator`](crate::server::auth::validator::CredentialValidator)
//! and stores the resulting [`Principal`] in the request extensions, where
//! handlers read it with `Extension<Principal>`.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::server::{
    auth::Principal,
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Rejects requests without a valid bearer token.
///
/// # Returns
/// - Inner handler response - Token valid, `Principal` attached to the request
/// - `401 Unauthorized` - Header missing or not `Bearer`, or token rejected
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers()).ok_or(AuthError::MissingCredentials)?;
    let principal: Principal = state.validator.validate(token)?;

    tracing::debug!("Authenticated request for subject {}", principal.subject);
    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// The scheme name is matched case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer <token>` header.
    #[error("Missing bearer token")]
    MissingCredentials,

    /// Token could not be parsed, or lacks a required claim.
    #[error("Malformed token")]
    MalformedToken,

    /// Token signature does not match the configured signing key.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token `iss` claim differs from the configured issuer.
    #[error("Token issuer does not match")]
    IssuerMismatch,

    /// Token `exp` claim is not strictly in the future.
    #[error("Token has expired")]
    ExpiredToken,

    /// Token `aud` claim differs from the configured audience.
    ///
    /// Only raised when audience validation is enabled in configuration.
    #[error("Token audience does not match")]
    AudienceMismatch,

    /// Login attempted with an unknown PESEL or a wrong password.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Token could not be signed.
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every rejection of a caller collapses to the same `401 Unauthorized` body so
/// clients cannot distinguish which validation step failed. The specific
/// reason is only logged at debug level. Signing failures are server faults
/// and map to 500.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Signing(reason) => {
                tracing::error!("Token signing failed: {}", reason);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::debug!("Rejected request: {}", err);

                (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

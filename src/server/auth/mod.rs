//! Token-based authentication.
//!
//! Tokens are compact HS256 JWS strings carrying `iss`, `sub` and `exp`, plus
//! the optional `iat`, `aud` and `role`. The [`issuer::TokenIssuer`] and the
//! [`validator::CredentialValidator`] share one symmetric key taken from the
//! UTF-8 bytes of `jwt:key`. No token state is kept server side.

pub mod encrypter;
pub mod issuer;
pub mod validator;

use serde::{Deserialize, Serialize};

use crate::server::{config::JwtConfig, error::config::ConfigError};

/// Shortest accepted signing key, in bytes (128 bits).
pub const MIN_KEY_BYTES: usize = 16;

/// Role claim carried by tokens issued to personnel on login.
pub const PERSONNEL_ROLE: &str = "personnel";

/// Registered and private claims embedded in every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Claims {
    pub iss: String,
    pub sub: String,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<Audience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// The `aud` claim, which JWT allows as one string or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum Audience {
    Single(String),
    Many(Vec<String>),
}

/// Identity of the caller, derived from a validated token.
///
/// Lives in the request extensions for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
    pub issuer: String,
    /// Expiry as unix seconds.
    pub expires_at: i64,
    pub role: Option<String>,
}

/// Returns the signing key bytes, rejecting keys below [`MIN_KEY_BYTES`].
fn signing_key(config: &JwtConfig) -> Result<&[u8], ConfigError> {
    let key = config.key.as_bytes();

    if key.len() < MIN_KEY_BYTES {
        return Err(ConfigError::InvalidValue {
            key: "jwt:key".to_string(),
            reason: format!(
                "signing key must be at least {} bytes, got {}",
                MIN_KEY_BYTES,
                key.len()
            ),
        });
    }

    Ok(key)
}

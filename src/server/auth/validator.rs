use chrono::Utc;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};

use crate::server::{
    auth::{signing_key, Claims, Principal},
    config::JwtConfig,
    error::{auth::AuthError, config::ConfigError},
};

/// Validates bearer tokens against the configured issuer and signing key.
///
/// Checks run in a fixed order: structure, signature, issuer, then expiry.
/// Expiry has no clock-skew leeway: a token is accepted only while
/// `now < exp`. The audience claim is ignored unless enabled in configuration.
/// Validation is pure computation and never blocks.
pub struct CredentialValidator {
    key: DecodingKey,
    validation: Validation,
}

impl CredentialValidator {
    /// Builds a validator from JWT settings.
    ///
    /// # Returns
    /// - `Ok(CredentialValidator)` - Validator sharing the issuer's key
    /// - `Err(ConfigError::InvalidValue)` - Signing key shorter than the HS256 minimum
    pub fn new(config: &JwtConfig) -> Result<Self, ConfigError> {
        let key = DecodingKey::from_secret(signing_key(config)?);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        // Expiry is checked after decoding so the boundary is strict.
        validation.validate_exp = false;
        validation.leeway = 0;

        match (&config.audience, config.validate_audience) {
            (Some(audience), true) => validation.set_audience(&[audience.as_str()]),
            _ => validation.validate_aud = false,
        }

        Ok(Self { key, validation })
    }

    /// Validates `token` against the current time.
    pub fn validate(&self, token: &str) -> Result<Principal, AuthError> {
        self.validate_at(token, Utc::now().timestamp())
    }

    /// Validates `token` as of `now` (unix seconds).
    pub fn validate_at(&self, token: &str, now: i64) -> Result<Principal, AuthError> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(map_jwt_error)?;
        let claims = data.claims;

        if claims.exp <= now {
            return Err(AuthError::ExpiredToken);
        }

        Ok(Principal {
            subject: claims.sub,
            issuer: claims.iss,
            expires_at: claims.exp,
            role: claims.role,
        })
    }
}

/// Maps jsonwebtoken errors onto the authentication taxonomy.
fn map_jwt_error(error: jsonwebtoken::errors::Error) -> AuthError {
    match error.kind() {
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::InvalidIssuer => AuthError::IssuerMismatch,
        ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        ErrorKind::InvalidAudience => AuthError::AudienceMismatch,
        ErrorKind::MissingRequiredClaim(claim) if claim == "aud" => AuthError::AudienceMismatch,
        _ => AuthError::MalformedToken,
    }
}

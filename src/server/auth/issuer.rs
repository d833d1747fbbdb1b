use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::server::{
    auth::{signing_key, Audience, Claims},
    config::JwtConfig,
    error::{auth::AuthError, config::ConfigError},
};

/// Claims describing the principal a token is issued for.
#[derive(Debug, Clone)]
pub struct PrincipalClaims {
    pub subject: String,
    pub role: Option<String>,
}

/// A signed token together with its expiry.
#[derive(Debug, Clone)]
pub struct Token {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs tokens with the configured issuer and shared secret.
pub struct TokenIssuer {
    key: EncodingKey,
    issuer: String,
    audience: Option<String>,
    lifetime: Duration,
}

impl TokenIssuer {
    /// Builds an issuer from JWT settings.
    ///
    /// # Returns
    /// - `Ok(TokenIssuer)` - Issuer ready to sign tokens
    /// - `Err(ConfigError::InvalidValue)` - Signing key shorter than the HS256 minimum
    pub fn new(config: &JwtConfig) -> Result<Self, ConfigError> {
        let key = EncodingKey::from_secret(signing_key(config)?);

        Ok(Self {
            key,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            lifetime: Duration::minutes(config.expiry_minutes),
        })
    }

    /// Signs a token for `claims` that expires at `expires_at`.
    pub fn issue(
        &self,
        claims: PrincipalClaims,
        expires_at: DateTime<Utc>,
    ) -> Result<Token, AuthError> {
        let claims = Claims {
            iss: self.issuer.clone(),
            sub: claims.subject,
            exp: expires_at.timestamp(),
            iat: Some(Utc::now().timestamp()),
            aud: self.audience.clone().map(Audience::Single),
            role: claims.role,
        };

        let value = encode(&Header::new(Algorithm::HS256), &claims, &self.key)
            .map_err(|e| AuthError::Signing(e.to_string()))?;

        Ok(Token { value, expires_at })
    }

    /// Signs a token for `subject` using the configured lifetime.
    pub fn issue_for(&self, subject: &str, role: Option<&str>) -> Result<Token, AuthError> {
        self.issue(
            PrincipalClaims {
                subject: subject.to_string(),
                role: role.map(str::to_string),
            },
            Utc::now() + self.lifetime,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::auth::test_support::{jwt_config, ISSUER};

    /// Expected: three dot-separated segments, expiry reported back
    #[test]
    fn issues_compact_token() {
        let issuer = TokenIssuer::new(&jwt_config()).unwrap();
        let expires_at = Utc::now() + Duration::hours(1);

        let token = issuer
            .issue(
                PrincipalClaims {
                    subject: "donor-42".to_string(),
                    role: None,
                },
                expires_at,
            )
            .unwrap();

        assert_eq!(token.value.split('.').count(), 3);
        assert_eq!(token.expires_at, expires_at);
    }

    /// Expected: issue_for applies the configured lifetime
    #[test]
    fn issue_for_uses_configured_lifetime() {
        let issuer = TokenIssuer::new(&jwt_config()).unwrap();
        let before = Utc::now();

        let token = issuer.issue_for("donor-42", Some("personnel")).unwrap();

        let lifetime = token.expires_at - before;
        assert!(lifetime >= Duration::minutes(60));
        assert!(lifetime < Duration::minutes(61));
    }

    /// Expected: Err(InvalidValue) for keys below 128 bits
    #[test]
    fn rejects_undersized_key() {
        let config = JwtConfig {
            issuer: ISSUER.to_string(),
            key: "fifteen-bytes!!".to_string(),
            expiry_minutes: 60,
            validate_audience: false,
            audience: None,
        };

        assert!(matches!(
            TokenIssuer::new(&config),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}

use crate::server::{
    auth::{
        encrypter::Encrypter,
        issuer::{Token, TokenIssuer},
        PERSONNEL_ROLE,
    },
    data::store::Store,
    error::{auth::AuthError, AppError},
    model::personnel::LoginParam,
};

/// Salt hashed against when the PESEL has no account, so both failure paths
/// cost one full hash.
const UNKNOWN_ACCOUNT_SALT: &str = "00000000000000000000000000000000";

/// Exchanges personnel credentials for a signed token.
pub struct AuthService<'a> {
    store: &'a Store,
    encrypter: &'a Encrypter,
    issuer: &'a TokenIssuer,
}

impl<'a> AuthService<'a> {
    pub fn new(store: &'a Store, encrypter: &'a Encrypter, issuer: &'a TokenIssuer) -> Self {
        Self {
            store,
            encrypter,
            issuer,
        }
    }

    /// Logs a personnel member in by PESEL and password.
    ///
    /// The token subject is the PESEL and its role is `personnel`. An unknown
    /// PESEL and a wrong password fail with the same error after the same
    /// amount of hashing.
    ///
    /// # Returns
    /// - `Ok(Token)` - Signed token with the configured lifetime
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown PESEL or wrong password
    pub async fn login(&self, param: LoginParam) -> Result<Token, AppError> {
        let pesel = param.pesel.trim();

        let Some(personnel) = self.store.personnel().find_by_key(pesel).await? else {
            self.encrypter
                .verify_blocking(&param.password, UNKNOWN_ACCOUNT_SALT, "")
                .await?;
            tracing::debug!("Login attempt for unknown PESEL");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self
            .encrypter
            .verify_blocking(&param.password, &personnel.salt, &personnel.password_hash)
            .await?
        {
            tracing::debug!("Wrong password for personnel {}", personnel.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.issuer.issue_for(&personnel.pesel, Some(PERSONNEL_ROLE))?;
        tracing::info!("Personnel {} logged in", personnel.id);

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        auth::{test_support::jwt_config, validator::CredentialValidator},
        model::personnel::CreatePersonnelParam,
        service::personnel::PersonnelService,
    };
    use std::time::Instant;

    async fn store_with_account(encrypter: &Encrypter) -> Store {
        let store = Store::in_memory();
        PersonnelService::new(&store, encrypter)
            .create(CreatePersonnelParam {
                pesel: "44051401359".to_string(),
                first_name: "Ewa".to_string(),
                last_name: "Lis".to_string(),
                password: "correct-password".to_string(),
            })
            .await
            .unwrap();

        store
    }

    fn login(pesel: &str, password: &str) -> LoginParam {
        LoginParam {
            pesel: pesel.to_string(),
            password: password.to_string(),
        }
    }

    /// Expected: token validates with PESEL subject and personnel role
    #[tokio::test]
    async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
        let encrypter = Encrypter::new(10);
        let store = store_with_account(&encrypter).await;
        let issuer = TokenIssuer::new(&jwt_config())?;
        let validator = CredentialValidator::new(&jwt_config())?;

        let token = AuthService::new(&store, &encrypter, &issuer)
            .login(login("44051401359", "correct-password"))
            .await?;
        let principal = validator.validate(&token.value)?;

        assert_eq!(principal.subject, "44051401359");
        assert_eq!(principal.role.as_deref(), Some(PERSONNEL_ROLE));

        Ok(())
    }

    /// Expected: InvalidCredentials for both wrong password and unknown PESEL
    #[tokio::test]
    async fn rejects_invalid_credentials() -> Result<(), AppError> {
        let encrypter = Encrypter::new(10);
        let store = store_with_account(&encrypter).await;
        let issuer = TokenIssuer::new(&jwt_config())?;
        let service = AuthService::new(&store, &encrypter, &issuer);

        for (pesel, password) in [
            ("44051401359", "wrong-password"),
            ("02070803628", "correct-password"),
        ] {
            assert!(matches!(
                service.login(login(pesel, password)).await,
                Err(AppError::AuthErr(AuthError::InvalidCredentials))
            ));
        }

        Ok(())
    }

    /// Expected: unknown PESEL costs a full hash, comparable to a wrong password
    #[tokio::test]
    async fn unknown_pesel_takes_as_long_as_wrong_password() -> Result<(), AppError> {
        let encrypter = Encrypter::new(50_000);
        let store = store_with_account(&encrypter).await;
        let issuer = TokenIssuer::new(&jwt_config())?;
        let service = AuthService::new(&store, &encrypter, &issuer);

        let started = Instant::now();
        for _ in 0..3 {
            let _ = service.login(login("44051401359", "wrong-password")).await;
        }
        let wrong_password = started.elapsed();

        let started = Instant::now();
        for _ in 0..3 {
            let _ = service.login(login("02070803628", "wrong-password")).await;
        }
        let unknown_pesel = started.elapsed();

        assert!(
            unknown_pesel * 4 >= wrong_password,
            "unknown PESEL took {:?}, wrong password took {:?}",
            unknown_pesel,
            wrong_password
        );

        Ok(())
    }
}

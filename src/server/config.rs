//! Layered application configuration.
//!
//! Settings are merged from three sources, lowest precedence first:
//!
//! 1. `appsettings.json` in the configuration directory (required)
//! 2. `appsettings.{environment}.json` in the same directory (optional)
//! 3. Environment variables prefixed with `BLOODDONORS__`, using `__` as the
//!    section separator (`BLOODDONORS__JWT__ISSUER` sets `jwt:issuer`)
//!
//! The merged [`Configuration`] is read once at boot and turned into the typed
//! [`Config`], which is then handed to every component that needs it.

use std::{
    collections::HashMap,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use ::config::{Environment, File, FileFormat};

use crate::server::{
    auth::MIN_KEY_BYTES,
    error::{config::ConfigError, AppError},
};

/// Prefix for environment variables overriding file settings.
pub const ENV_PREFIX: &str = "BLOODDONORS";

/// Separator between the prefix and sections of an environment variable name.
pub const ENV_SEPARATOR: &str = "__";

/// Environment variable naming the active environment overlay.
pub const ENVIRONMENT_VAR: &str = "BLOODDONORS_ENVIRONMENT";

/// Environment variable pointing at the directory holding the settings files.
pub const CONFIG_DIR_VAR: &str = "BLOODDONORS_CONFIG_DIR";

const DEFAULT_ENVIRONMENT: &str = "Development";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_TOKEN_EXPIRY_MINUTES: i64 = 60;

/// Immutable key-value view over the merged configuration sources.
///
/// Keys may be given with either `:` or `.` as section separator; both
/// `jwt:issuer` and `jwt.issuer` address the same value.
#[derive(Debug, Clone)]
pub struct Configuration {
    inner: ::config::Config,
}

impl Configuration {
    /// Loads configuration from `base_path` for the given environment name,
    /// overlaying the process environment.
    ///
    /// # Returns
    /// - `Ok(Configuration)` - Merged configuration view
    /// - `Err(ConfigError::Load)` - Base file missing or any file failed to parse
    pub fn load(base_path: &Path, environment: &str) -> Result<Self, ConfigError> {
        Self::load_with_env(base_path, environment, None)
    }

    /// Loads configuration using an explicit set of environment variables.
    ///
    /// Passing `None` reads the process environment. Passing a map replaces
    /// the process environment entirely, which keeps tests independent of
    /// the host.
    pub fn load_with_env(
        base_path: &Path,
        environment: &str,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let inner = ::config::Config::builder()
            .add_source(
                File::from(base_path.join("appsettings.json"))
                    .format(FileFormat::Json)
                    .required(true),
            )
            .add_source(
                File::from(base_path.join(format!("appsettings.{}.json", environment)))
                    .format(FileFormat::Json)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .source(env),
            )
            .build()?;

        Ok(Self { inner })
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get_string(&normalize_key(key)).ok()
    }

    /// Returns the value stored under `key` or a `MissingKey` error.
    pub fn require(&self, key: &str) -> Result<String, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: key.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(default),
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.replace(':', ".").to_lowercase()
}

/// JWT issuance and validation settings.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Expected and emitted `iss` claim.
    pub issuer: String,
    /// Shared HMAC secret; its UTF-8 bytes are the signing key.
    pub key: String,
    /// Lifetime of issued tokens in minutes.
    pub expiry_minutes: i64,
    /// Whether the `aud` claim is checked. Off unless explicitly enabled.
    pub validate_audience: bool,
    /// Expected and emitted `aud` claim.
    pub audience: Option<String>,
}

impl JwtConfig {
    pub fn from_configuration(configuration: &Configuration) -> Result<Self, ConfigError> {
        let issuer = configuration.require("jwt:issuer")?;
        let key = configuration.require("jwt:key")?;

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

        let expiry_minutes =
            configuration.parse_or("jwt:expiry_minutes", DEFAULT_TOKEN_EXPIRY_MINUTES)?;
        if expiry_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "jwt:expiry_minutes".to_string(),
                reason: "token lifetime must be positive".to_string(),
            });
        }

        let validate_audience = configuration.parse_or("jwt:validate_audience", false)?;
        let audience = configuration.get("jwt:audience");
        if validate_audience && audience.is_none() {
            return Err(ConfigError::MissingKey("jwt:audience".to_string()));
        }

        Ok(Self {
            issuer,
            key,
            expiry_minutes,
            validate_audience,
            audience,
        })
    }
}

/// Persistence backend selected at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    /// Relational store reached through SeaORM.
    Sqlite { url: String },
    /// Process-local store, lost on shutdown.
    Memory,
}

impl DatabaseConfig {
    pub fn from_configuration(configuration: &Configuration) -> Result<Self, ConfigError> {
        let provider = configuration
            .get("database:provider")
            .unwrap_or_else(|| "memory".to_string());

        match provider.to_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite {
                url: configuration.require("database:url")?,
            }),
            "memory" | "inmemory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidValue {
                key: "database:provider".to_string(),
                reason: format!("unknown provider '{}', expected 'sqlite' or 'memory'", other),
            }),
        }
    }
}

/// Baseline data inserted at boot.
#[derive(Debug, Clone, Default)]
pub struct SeedConfig {
    /// Initial personnel account as `(pesel, password)`, seeded when both are set.
    pub personnel: Option<(String, String)>,
}

impl SeedConfig {
    pub fn from_configuration(configuration: &Configuration) -> Self {
        let personnel = configuration
            .get("seed:personnel_pesel")
            .zip(configuration.get("seed:personnel_password"));

        Self { personnel }
    }
}

/// Typed application configuration, built once at boot.
#[derive(Debug, Clone)]
pub struct Config {
    pub jwt: JwtConfig,
    pub database: DatabaseConfig,
    pub seed: SeedConfig,
    pub server_address: SocketAddr,
}

impl Config {
    /// Loads configuration from the directory and environment named by the
    /// `BLOODDONORS_CONFIG_DIR` and `BLOODDONORS_ENVIRONMENT` variables.
    pub fn from_env() -> Result<Self, AppError> {
        let base_path = std::env::var(CONFIG_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        tracing::info!(
            "Loading configuration from {} for environment {}",
            base_path.display(),
            environment
        );

        let configuration = Configuration::load(&base_path, &environment)?;

        Ok(Self::from_configuration(&configuration)?)
    }

    pub fn from_configuration(configuration: &Configuration) -> Result<Self, ConfigError> {
        let server_address = configuration.parse_or(
            "server:address",
            DEFAULT_SERVER_ADDRESS
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "server:address".to_string(),
                    reason: e.to_string(),
                })?,
        )?;

        Ok(Self {
            jwt: JwtConfig::from_configuration(configuration)?,
            database: DatabaseConfig::from_configuration(configuration)?,
            seed: SeedConfig::from_configuration(configuration),
            server_address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const BASE: &str = r#"{
        "jwt": { "issuer": "blooddonors", "key": "supersecretkeysupersecretkey123" },
        "database": { "provider": "memory" }
    }"#;

    fn write_settings(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    fn env(vars: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    /// Expected: Err(Load) when the base settings file is absent
    #[test]
    fn fails_without_base_file() {
        let dir = TempDir::new().unwrap();

        let result = Configuration::load_with_env(dir.path(), "Development", env(&[]));

        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    /// Expected: Ok reading base values with both separator styles
    #[test]
    fn reads_base_file() {
        let dir = TempDir::new().unwrap();
        write_settings(&dir, "appsettings.json", BASE);

        let configuration =
            Configuration::load_with_env(dir.path(), "Development", env(&[])).unwrap();

        assert_eq!(configuration.get("jwt:issuer").as_deref(), Some("blooddonors"));
        assert_eq!(configuration.get("jwt.issuer").as_deref(), Some("blooddonors"));
        assert!(configuration.get("jwt:audience").is_none());
    }

    /// Expected: environment file overrides base, missing environment file is skipped
    #[test]
    fn applies_environment_overlay_when_present() {
        let dir = TempDir::new().unwrap();
        write_settings(&dir, "appsettings.json", BASE);
        write_settings(
            &dir,
            "appsettings.Production.json",
            r#"{ "jwt": { "issuer": "production-issuer" } }"#,
        );

        let production =
            Configuration::load_with_env(dir.path(), "Production", env(&[])).unwrap();
        let staging = Configuration::load_with_env(dir.path(), "Staging", env(&[])).unwrap();

        assert_eq!(
            production.get("jwt:issuer").as_deref(),
            Some("production-issuer")
        );
        assert_eq!(
            production.get("jwt:key").as_deref(),
            Some("supersecretkeysupersecretkey123")
        );
        assert_eq!(staging.get("jwt:issuer").as_deref(), Some("blooddonors"));
    }

    /// Expected: environment variable wins over both files
    #[test]
    fn environment_variables_take_precedence() {
        let dir = TempDir::new().unwrap();
        write_settings(&dir, "appsettings.json", BASE);
        write_settings(
            &dir,
            "appsettings.Development.json",
            r#"{ "jwt": { "issuer": "overlay-issuer" } }"#,
        );

        let configuration = Configuration::load_with_env(
            dir.path(),
            "Development",
            env(&[
                ("BLOODDONORS__JWT__ISSUER", "env-issuer"),
                ("UNRELATED__JWT__KEY", "ignored"),
            ]),
        )
        .unwrap();

        assert_eq!(configuration.get("jwt:issuer").as_deref(), Some("env-issuer"));
        assert_eq!(
            configuration.get("jwt:key").as_deref(),
            Some("supersecretkeysupersecretkey123")
        );
    }

    /// Expected: typed config with defaults for optional keys
    #[test]
    fn builds_typed_config_with_defaults() {
        let dir = TempDir::new().unwrap();
        write_settings(&dir, "appsettings.json", BASE);
        let configuration =
            Configuration::load_with_env(dir.path(), "Development", env(&[])).unwrap();

        let config = Config::from_configuration(&configuration).unwrap();

        assert_eq!(config.jwt.issuer, "blooddonors");
        assert_eq!(config.jwt.expiry_minutes, 60);
        assert!(!config.jwt.validate_audience);
        assert_eq!(config.database, DatabaseConfig::Memory);
        assert!(config.seed.personnel.is_none());
        assert_eq!(config.server_address.port(), 8080);
    }

    /// Expected: Err(MissingKey) when the signing key is absent
    #[test]
    fn rejects_missing_jwt_key() {
        let dir = TempDir::new().unwrap();
        write_settings(&dir, "appsettings.json", r#"{ "jwt": { "issuer": "x" } }"#);
        let configuration =
            Configuration::load_with_env(dir.path(), "Development", env(&[])).unwrap();

        let result = JwtConfig::from_configuration(&configuration);

        assert!(matches!(result, Err(ConfigError::MissingKey(key)) if key == "jwt:key"));
    }

    /// Expected: Err(InvalidValue) for a key shorter than the HMAC minimum
    #[test]
    fn rejects_undersized_jwt_key() {
        let dir = TempDir::new().unwrap();
        write_settings(
            &dir,
            "appsettings.json",
            r#"{ "jwt": { "issuer": "x", "key": "short" } }"#,
        );
        let configuration =
            Configuration::load_with_env(dir.path(), "Development", env(&[])).unwrap();

        let result = JwtConfig::from_configuration(&configuration);

        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    /// Expected: sqlite provider requires a url, unknown providers are rejected
    #[test]
    fn selects_database_provider() {
        let dir = TempDir::new().unwrap();
        write_settings(&dir, "appsettings.json", BASE);

        let sqlite = Configuration::load_with_env(
            dir.path(),
            "Development",
            env(&[
                ("BLOODDONORS__DATABASE__PROVIDER", "sqlite"),
                ("BLOODDONORS__DATABASE__URL", "sqlite://data.db?mode=rwc"),
            ]),
        )
        .unwrap();
        let missing_url = Configuration::load_with_env(
            dir.path(),
            "Development",
            env(&[("BLOODDONORS__DATABASE__PROVIDER", "sqlite")]),
        )
        .unwrap();
        let unknown = Configuration::load_with_env(
            dir.path(),
            "Development",
            env(&[("BLOODDONORS__DATABASE__PROVIDER", "oracle")]),
        )
        .unwrap();

        assert_eq!(
            DatabaseConfig::from_configuration(&sqlite).unwrap(),
            DatabaseConfig::Sqlite {
                url: "sqlite://data.db?mode=rwc".to_string()
            }
        );
        assert!(matches!(
            DatabaseConfig::from_configuration(&missing_url),
            Err(ConfigError::MissingKey(_))
        ));
        assert!(matches!(
            DatabaseConfig::from_configuration(&unknown),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    /// Expected: audience validation demands a configured audience
    #[test]
    fn audience_validation_requires_audience() {
        let dir = TempDir::new().unwrap();
        write_settings(&dir, "appsettings.json", BASE);
        let configuration = Configuration::load_with_env(
            dir.path(),
            "Development",
            env(&[("BLOODDONORS__JWT__VALIDATE_AUDIENCE", "true")]),
        )
        .unwrap();

        let result = JwtConfig::from_configuration(&configuration);

        assert!(matches!(result, Err(ConfigError::MissingKey(key)) if key == "jwt:audience"));
    }
}

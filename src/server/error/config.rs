use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Layered configuration sources could not be read or merged.
    ///
    /// Raised when the required base settings file is absent or any present
    /// file fails to parse. Aborts startup.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// Required configuration key is not set in any source.
    ///
    /// Keys are reported in their dotted `section:name` form, e.g. `jwt:key`.
    #[error("Missing required configuration key: {0}")]
    MissingKey(String),

    /// Configuration key is present but its value is unusable.
    #[error("Invalid value for configuration key {key}: {reason}")]
    InvalidValue {
        /// The key whose value was rejected
        key: String,
        /// Why the value was rejected
        reason: String,
    },
}

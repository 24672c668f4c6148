use thiserror::Error;

/// Failures while assembling [`crate::RollConfig`] or reading values out of it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML layer or `ROLLCALL_*` variable could not be parsed or merged.
    #[error("failed to load rollcall settings: {0}")]
    Figment(#[from] figment::Error),

    /// A setting parsed but is unusable, e.g. a base URL without a scheme.
    #[error("`{field}` is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}

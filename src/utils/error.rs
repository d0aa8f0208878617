use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillingError {
    /// Strict classification rejected a value that is neither the
    /// unknown-customer marker nor a record exposing the resolved
    /// capability surface.
    #[error("investigate bad value: <{value}>")]
    InvalidArgument { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl BillingError {
    pub fn invalid_argument(value: impl std::fmt::Display) -> Self {
        BillingError::InvalidArgument {
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BillingError>;

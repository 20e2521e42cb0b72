use thiserror::Error;

/// Result type alias using SupportError
pub type Result<T> = std::result::Result<T, SupportError>;

/// Failures raised by the support helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SupportError {
    /// A validation rule rejected a payload field
    #[error("Validation failed: rule '{rule}' on '{path}': {reason}")]
    Validation {
        rule: String,
        path: String,
        reason: String,
    },

    /// A token lifetime was negative or overflowed the calendar
    #[error("Invalid token lifetime: {reason}")]
    InvalidLifetime { reason: String },

    /// A query parameter had an empty key
    #[error("Query parameter key must not be empty")]
    EmptyQueryKey,
}

impl SupportError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SupportError::Validation { .. } => "ERR_VALIDATION",
            SupportError::InvalidLifetime { .. } => "ERR_INVALID_LIFETIME",
            SupportError::EmptyQueryKey => "ERR_EMPTY_QUERY_KEY",
        }
    }
}

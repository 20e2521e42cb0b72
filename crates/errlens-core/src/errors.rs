use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using LensError
pub type Result<T> = std::result::Result<T, LensError>;

// ========== Classified Error Taxonomy ==========

/// The kind of upstream error a payload was classified as
///
/// This is the subject matter being classified, not a failure of the engine.
/// Each variant has a stable wire name used in reports and HTTP envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "RAML_ERROR")]
    Raml,
    #[serde(rename = "SAP_ERROR")]
    Sap,
    #[serde(rename = "SF_ERROR")]
    Salesforce,
    #[serde(rename = "GATEWAY_ERROR")]
    Gateway,
    #[serde(rename = "UNKNOWN_ERROR")]
    Unknown,
}

impl ErrorType {
    /// Get the stable wire name for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Raml => "RAML_ERROR",
            ErrorType::Sap => "SAP_ERROR",
            ErrorType::Salesforce => "SF_ERROR",
            ErrorType::Gateway => "GATEWAY_ERROR",
            ErrorType::Unknown => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ========== Engine Edge Errors ==========

/// Failures at the edges of the engine (input acquisition, strict hint lookup)
///
/// Classification itself never fails; these only surface from helpers that
/// read input or resolve caller-supplied names strictly.
#[derive(Error, Debug)]
pub enum LensError {
    /// A shape id is not in the registry
    #[error("Unknown shape id: {id}")]
    UnknownShape { id: String },

    /// Input could not be read
    #[error("Failed to read {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// A report could not be serialized
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LensError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            LensError::UnknownShape { .. } => "ERR_UNKNOWN_SHAPE",
            LensError::Io { .. } => "ERR_IO",
            LensError::Serialization(_) => "ERR_SERIALIZATION",
        }
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        LensError::Io {
            context: context.into(),
            source,
        }
    }
}

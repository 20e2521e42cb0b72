//! Field extraction
//!
//! Two entry points with different cost profiles:
//!
//! - [`extract_auto`] runs the matcher over the whole registry, then applies
//!   the matched shape's rules.
//! - [`extract_by_hint`] looks the hinted shape up directly and tests it plus
//!   only the shapes ranked ahead of it. A hint that is unregistered, that the
//!   value does not conform to, or that a higher-priority shape outranks,
//!   degrades to [`extract_auto`]. Either way the result equals auto-detect.
//!
//! Neither path can fail; every field has a non-empty constant fallback.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ErrorType;
use crate::matcher::{self, value_kind, MatchResult};
use crate::registry::{self, ErrorShape, NO_DETAILS, UNKNOWN_CODE, UNKNOWN_MESSAGE, UNKNOWN_SOURCE};
use crate::schema::EVENT_HINT_FALLBACK;

/// Normalized view of an upstream error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedInfo {
    pub message: String,
    pub code: String,
    pub details: String,
    pub source: String,
    #[serde(rename = "type")]
    pub error_type: ErrorType,
}

impl ExtractedInfo {
    /// The fully-defaulted info reported when nothing matched
    pub fn unknown() -> Self {
        Self {
            message: UNKNOWN_MESSAGE.to_string(),
            code: UNKNOWN_CODE.to_string(),
            details: NO_DETAILS.to_string(),
            source: UNKNOWN_SOURCE.to_string(),
            error_type: ErrorType::Unknown,
        }
    }
}

/// Which extraction path a handle should take
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Hint {
    /// Detect the shape by scanning the registry
    #[default]
    Auto,
    /// Caller asserts the payload has this shape id
    Shape(String),
}

impl Hint {
    pub fn as_str(&self) -> &str {
        match self {
            Hint::Auto => "auto",
            Hint::Shape(id) => id,
        }
    }
}

impl From<&str> for Hint {
    fn from(s: &str) -> Self {
        if s.trim().is_empty() || s.eq_ignore_ascii_case("auto") {
            Hint::Auto
        } else {
            Hint::Shape(s.to_string())
        }
    }
}

impl From<String> for Hint {
    fn from(s: String) -> Self {
        if s.trim().is_empty() || s.eq_ignore_ascii_case("auto") {
            Hint::Auto
        } else {
            Hint::Shape(s)
        }
    }
}

impl FromStr for Hint {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Hint::from(s))
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apply a shape's rules to a value, without testing the shape
pub fn extract_with(shape: &ErrorShape, value: &Value) -> ExtractedInfo {
    ExtractedInfo {
        message: shape.message.apply(value),
        code: shape.code.apply(value),
        details: shape.details.apply(value),
        source: shape.source.to_string(),
        error_type: shape.error_type,
    }
}

/// Detect the shape, then extract
pub fn extract_auto(value: &Value) -> ExtractedInfo {
    extract_matched(matcher::classify(value), value)
}

/// Extract using the shape named by `hint_id`, falling back to auto-detect
pub fn extract_by_hint(value: &Value, hint_id: &str) -> ExtractedInfo {
    extract_matched(resolve_hint(value, hint_id), value)
}

/// Extract along whichever path `hint` selects
pub fn extract(value: &Value, hint: &Hint) -> ExtractedInfo {
    extract_matched(resolve(value, hint), value)
}

/// The shape a hint resolves to for this value, after any fallback
pub fn resolve(value: &Value, hint: &Hint) -> MatchResult {
    match hint {
        Hint::Auto => matcher::classify(value),
        Hint::Shape(id) => resolve_hint(value, id),
    }
}

fn resolve_hint(value: &Value, hint_id: &str) -> MatchResult {
    match registry::confirm(hint_id, value) {
        Some(shape) => MatchResult::matched(shape),
        None => {
            tracing::debug!(
                component = module_path!(),
                op = "extract_by_hint",
                event = EVENT_HINT_FALLBACK,
                hint = hint_id,
                registered = registry::find(hint_id).is_some(),
                value_kind = value_kind(value),
            );
            matcher::classify(value)
        }
    }
}

fn extract_matched(result: MatchResult, value: &Value) -> ExtractedInfo {
    match result.shape() {
        Some(shape) => extract_with(shape, value),
        None => ExtractedInfo::unknown(),
    }
}

//! First-match classification against the shape registry

use serde_json::Value;

use crate::errors::ErrorType;
use crate::registry::{self, ErrorShape, UNKNOWN_ID};
use crate::schema::EVENT_UNMATCHED;

/// Outcome of running a value through the registry
#[derive(Debug, Clone, Copy)]
pub struct MatchResult {
    shape: Option<&'static ErrorShape>,
}

impl MatchResult {
    pub fn unknown() -> Self {
        Self { shape: None }
    }

    pub fn matched(shape: &'static ErrorShape) -> Self {
        Self { shape: Some(shape) }
    }

    /// Id of the matched shape, or `"unknown"`
    pub fn shape_id(&self) -> &'static str {
        self.shape.map_or(UNKNOWN_ID, |s| s.id)
    }

    pub fn shape(&self) -> Option<&'static ErrorShape> {
        self.shape
    }

    pub fn error_type(&self) -> ErrorType {
        self.shape.map_or(ErrorType::Unknown, |s| s.error_type)
    }

    pub fn is_unknown(&self) -> bool {
        self.shape.is_none()
    }
}

impl PartialEq for MatchResult {
    fn eq(&self, other: &Self) -> bool {
        self.shape_id() == other.shape_id()
    }
}

impl Eq for MatchResult {}

/// Classify `value` by testing registered shapes in priority order
///
/// The first shape whose structural test passes wins. Never fails: input
/// that matches nothing yields [`MatchResult::unknown`].
pub fn classify(value: &Value) -> MatchResult {
    match registry::shapes_in_priority_order()
        .iter()
        .find(|shape| shape.matches(value))
    {
        Some(shape) => MatchResult::matched(shape),
        None => {
            tracing::debug!(
                component = module_path!(),
                op = "classify",
                event = EVENT_UNMATCHED,
                value_kind = value_kind(value),
            );
            MatchResult::unknown()
        }
    }
}

/// Coarse JSON kind, safe to log without leaking payload content
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

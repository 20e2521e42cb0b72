//! Caller-facing handle
//!
//! An [`ErrorHandle`] threads a borrowed payload, a hint and a correlation id
//! through the engine. Configuration methods return a new handle and leave the
//! receiver untouched; terminal queries re-derive their answer from
//! `(value, hint)` on every call, so they are consistent with each other and
//! unaffected by handles derived later.
//!
//! ```
//! use errlens_core::ErrorHandle;
//! use serde_json::json;
//!
//! let payload = json!({"foo": "bar"});
//! let handle = ErrorHandle::from_value(&payload);
//! assert_eq!(handle.error_type().as_str(), "UNKNOWN_ERROR");
//! assert_eq!(handle.get_message(), "Unknown error occurred");
//! assert_eq!(handle.to_http_response().http_status, 500);
//! ```

use serde_json::Value;

use errlens_core_types::{CorrelationId, Environment};

use crate::errors::ErrorType;
use crate::extractor::{self, ExtractedInfo, Hint};
use crate::matcher::MatchResult;
use crate::registry::{NO_DETAILS, UNKNOWN_CODE, UNKNOWN_MESSAGE, UNKNOWN_SOURCE};
use crate::report::{self, ClassificationReport, HttpResponse, RetryPolicy};

/// Immutable classification handle over a caller-owned value
#[derive(Debug, Clone)]
pub struct ErrorHandle<'a> {
    value: &'a Value,
    hint: Hint,
    correlation_id: CorrelationId,
    env: Environment,
}

impl<'a> ErrorHandle<'a> {
    /// Wrap `value` with auto-detection, a fresh correlation id and the system clock
    pub fn from_value(value: &'a Value) -> Self {
        Self::with_environment(value, Environment::system())
    }

    /// Wrap `value` against an explicit clock and id source
    pub fn with_environment(value: &'a Value, env: Environment) -> Self {
        Self {
            value,
            hint: Hint::Auto,
            correlation_id: env.next_id(),
            env,
        }
    }

    /// New handle that extracts via `hint` (a shape id, or `"auto"`)
    #[must_use]
    pub fn of_type(&self, hint: impl Into<Hint>) -> Self {
        Self {
            hint: hint.into(),
            ..self.clone()
        }
    }

    /// New handle carrying `id` as its correlation id
    #[must_use]
    pub fn with_correlation_id(&self, id: impl Into<CorrelationId>) -> Self {
        Self {
            correlation_id: id.into(),
            ..self.clone()
        }
    }

    pub fn hint(&self) -> &Hint {
        &self.hint
    }

    pub fn correlation_id(&self) -> &CorrelationId {
        &self.correlation_id
    }

    /// The wrapped value, exactly as supplied
    pub fn raw(&self) -> &'a Value {
        self.value
    }

    // ---- terminal queries ----

    /// Which shape the value resolves to under this handle's hint
    pub fn matched(&self) -> MatchResult {
        extractor::resolve(self.value, &self.hint)
    }

    pub fn extracted(&self) -> ExtractedInfo {
        extractor::extract(self.value, &self.hint)
    }

    pub fn get_message(&self) -> String {
        self.matched()
            .shape()
            .map_or_else(|| UNKNOWN_MESSAGE.to_string(), |s| s.message.apply(self.value))
    }

    pub fn error_type(&self) -> ErrorType {
        self.matched().error_type()
    }

    pub fn error_code(&self) -> String {
        self.matched()
            .shape()
            .map_or_else(|| UNKNOWN_CODE.to_string(), |s| s.code.apply(self.value))
    }

    pub fn details(&self) -> String {
        self.matched()
            .shape()
            .map_or_else(|| NO_DETAILS.to_string(), |s| s.details.apply(self.value))
    }

    pub fn source(&self) -> String {
        self.matched()
            .shape()
            .map_or_else(|| UNKNOWN_SOURCE.to_string(), |s| s.source.to_string())
    }

    /// Full classification report, stamped with the environment's clock
    pub fn info(&self) -> ClassificationReport {
        let report = ClassificationReport::new(
            self.extracted(),
            self.env.now(),
            self.correlation_id.clone(),
        );
        tracing::debug!(
            component = module_path!(),
            op = "info",
            correlation_id = %report.correlation_id,
            error_type = report.error_type().as_str(),
            http_status = report.http_status,
            hint = self.hint.as_str(),
        );
        report
    }

    pub fn to_http_response(&self) -> HttpResponse {
        HttpResponse::from(self.info())
    }

    pub fn is_retryable(&self) -> bool {
        report::is_retryable(self.error_type())
    }

    pub fn retry_config(&self) -> RetryPolicy {
        report::retry_config(self.error_type())
    }
}

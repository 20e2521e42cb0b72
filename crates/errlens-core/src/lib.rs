//! errlens core - structural classification of upstream error payloads
//!
//! Upstream systems (a RAML-defined API gateway, an SAP backend, Salesforce,
//! generic runtime wrappers) report failures in loosely-structured JSON that
//! shares no schema. This crate answers, uniformly: what went wrong, what kind
//! of error it is, and what a caller should do about it.
//!
//! - **registry**: ordered table of recognized shapes and their extraction rules
//! - **matcher**: first-match classification against the registry
//! - **extractor**: auto-detect and hinted extraction with defaulted fields
//! - **report**: HTTP status mapping and retry policy
//! - **handle**: immutable caller-facing handle; **lens**: one-shot equivalents
//!
//! Classification never fails. Malformed or unrecognized input yields
//! `UNKNOWN_ERROR` with fallback strings rather than an error.

pub mod errors;
pub mod extractor;
pub mod handle;
pub mod lens;
pub mod logging_facility;
pub mod matcher;
pub mod path;
pub mod registry;
pub mod report;

pub use errlens_core_types::schema;

// Re-export commonly used types
pub use errlens_core_types::{CorrelationId, Environment};
pub use errors::{ErrorType, LensError, Result};
pub use extractor::{extract_auto, extract_by_hint, ExtractedInfo, Hint};
pub use handle::ErrorHandle;
pub use matcher::{classify, MatchResult};
pub use registry::{shapes_in_priority_order, ErrorShape};
pub use report::{
    is_retryable, map_code_to_http_status, retry_config, ClassificationReport, HttpResponse,
    RetryPolicy, RetryStrategy,
};

use serde_json::Value;

/// Entry point: a handle over `value` with auto-detection and a fresh correlation id
pub fn inspect(value: &Value) -> ErrorHandle<'_> {
    ErrorHandle::from_value(value)
}

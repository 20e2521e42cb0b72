//! Handle-free queries for one-shot use
//!
//! Each function behaves like the matching [`ErrorHandle`] method on a handle
//! created with [`ErrorHandle::from_value`]. Reports from [`info`] and
//! [`to_http_response`] carry the wall-clock time and a fresh correlation id,
//! so repeated calls differ in those two fields; use [`info_with`] with a
//! fixed [`Environment`] for byte-identical reports.

use serde_json::Value;

use errlens_core_types::Environment;

use crate::errors::ErrorType;
use crate::extractor::{self, ExtractedInfo, Hint};
use crate::handle::ErrorHandle;
use crate::report::{ClassificationReport, HttpResponse, RetryPolicy};

pub fn message(value: &Value) -> String {
    ErrorHandle::from_value(value).get_message()
}

pub fn error_type(value: &Value) -> ErrorType {
    ErrorHandle::from_value(value).error_type()
}

pub fn error_code(value: &Value) -> String {
    ErrorHandle::from_value(value).error_code()
}

pub fn details(value: &Value) -> String {
    ErrorHandle::from_value(value).details()
}

pub fn source(value: &Value) -> String {
    ErrorHandle::from_value(value).source()
}

pub fn is_retryable(value: &Value) -> bool {
    ErrorHandle::from_value(value).is_retryable()
}

pub fn retry_config(value: &Value) -> RetryPolicy {
    ErrorHandle::from_value(value).retry_config()
}

/// Report with a fresh correlation id and the current time
pub fn info(value: &Value) -> ClassificationReport {
    info_with(value, &Environment::system())
}

/// Report stamped from `env`'s clock and id source
pub fn info_with(value: &Value, env: &Environment) -> ClassificationReport {
    ErrorHandle::with_environment(value, env.clone()).info()
}

pub fn to_http_response(value: &Value) -> HttpResponse {
    ErrorHandle::from_value(value).to_http_response()
}

/// Extracted fields along the path `hint` selects
pub fn extract(value: &Value, hint: &Hint) -> ExtractedInfo {
    extractor::extract(value, hint)
}

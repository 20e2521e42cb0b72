//! Classification report
//!
//! Turns extracted fields into a decision surface: an HTTP status, a retry
//! decision and a uniform retry policy. All tables here are static; nothing is
//! configurable per call.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use errlens_core_types::CorrelationId;

use crate::errors::ErrorType;
use crate::extractor::ExtractedInfo;
use crate::registry::SAP_SENTINEL_CODE;

pub const DEFAULT_HTTP_STATUS: u16 = 500;

/// How a status rule compares against the (upper-cased) error code
#[derive(Debug, Clone, Copy)]
enum CodeMatch {
    Contains(&'static str),
    Equals(&'static str),
}

#[derive(Debug, Clone, Copy)]
struct StatusRule {
    matcher: CodeMatch,
    status: u16,
}

// Ordered: first match wins, so narrower rules sit above broader ones.
#[rustfmt::skip]
const STATUS_RULES: &[StatusRule] = &[
    StatusRule { matcher: CodeMatch::Contains("TIMEOUT"), status: 504 },
    StatusRule { matcher: CodeMatch::Contains("VALIDATION"), status: 400 },
    StatusRule { matcher: CodeMatch::Contains("NOT_FOUND"), status: 404 },
    StatusRule { matcher: CodeMatch::Contains("UNAUTHORIZED"), status: 401 },
    StatusRule { matcher: CodeMatch::Contains("FORBIDDEN"), status: 403 },
    StatusRule { matcher: CodeMatch::Contains("CONNECTIVITY"), status: 503 },
    StatusRule { matcher: CodeMatch::Equals(SAP_SENTINEL_CODE), status: 502 },
    StatusRule { matcher: CodeMatch::Equals("GATEWAY_ERROR"), status: 502 },
];

/// Map an error code to the HTTP status a caller should surface
pub fn map_code_to_http_status(code: &str) -> u16 {
    let code = code.to_ascii_uppercase();
    STATUS_RULES
        .iter()
        .find(|rule| match rule.matcher {
            CodeMatch::Contains(needle) => code.contains(needle),
            CodeMatch::Equals(exact) => code == exact,
        })
        .map_or(DEFAULT_HTTP_STATUS, |rule| rule.status)
}

/// Whether errors of this type are worth retrying
///
/// Gateway and backend connectivity failures are transient; validation and
/// business-rule rejections are not.
pub fn is_retryable(error_type: ErrorType) -> bool {
    match error_type {
        ErrorType::Sap | ErrorType::Gateway => true,
        ErrorType::Raml | ErrorType::Salesforce | ErrorType::Unknown => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RetryStrategy {
    None,
    Exponential,
}

/// Retry policy for an error type; always fully populated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryPolicy {
    pub should_retry: bool,
    pub max_retries: u32,
    pub backoff_millis: u64,
    pub strategy: RetryStrategy,
}

impl RetryPolicy {
    pub const NO_RETRY: RetryPolicy = RetryPolicy {
        should_retry: false,
        max_retries: 0,
        backoff_millis: 0,
        strategy: RetryStrategy::None,
    };

    pub const TRANSIENT: RetryPolicy = RetryPolicy {
        should_retry: true,
        max_retries: 3,
        backoff_millis: 1000,
        strategy: RetryStrategy::Exponential,
    };
}

/// Retry policy derived from [`is_retryable`]
pub fn retry_config(error_type: ErrorType) -> RetryPolicy {
    if is_retryable(error_type) {
        RetryPolicy::TRANSIENT
    } else {
        RetryPolicy::NO_RETRY
    }
}

/// Extracted fields plus the HTTP and retry decisions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationReport {
    #[serde(flatten)]
    pub info: ExtractedInfo,
    pub http_status: u16,
    pub retryable: bool,
    pub timestamp: String,
    pub correlation_id: CorrelationId,
}

impl ClassificationReport {
    pub fn new(info: ExtractedInfo, at: DateTime<Utc>, correlation_id: CorrelationId) -> Self {
        Self {
            http_status: map_code_to_http_status(&info.code),
            retryable: is_retryable(info.error_type),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            correlation_id,
            info,
        }
    }

    pub fn message(&self) -> &str {
        &self.info.message
    }

    pub fn code(&self) -> &str {
        &self.info.code
    }

    pub fn error_type(&self) -> ErrorType {
        self.info.error_type
    }
}

/// Envelope a caller can hand straight to an HTTP layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub http_status: u16,
    pub error: ClassificationReport,
}

impl From<ClassificationReport> for HttpResponse {
    fn from(report: ClassificationReport) -> Self {
        Self {
            http_status: report.http_status,
            error: report,
        }
    }
}

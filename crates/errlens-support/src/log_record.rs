//! Structured log record assembly
//!
//! Pure data assembly: the builder accumulates fields and produces a
//! serializable record. Emitting the record is the caller's concern.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use errlens_core::ClassificationReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// A finished log record; `fields` are kept in sorted key order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl LogRecord {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Field-accumulation builder; later writes to a key replace earlier ones
#[derive(Debug, Clone)]
pub struct LogRecordBuilder {
    level: LogLevel,
    message: String,
    timestamp: Option<String>,
    fields: BTreeMap<String, Value>,
}

impl LogRecordBuilder {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: None,
            fields: BTreeMap::new(),
        }
    }

    /// Add or replace a single field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Stamp the record with an instant (RFC 3339, millisecond precision)
    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at.to_rfc3339_opts(SecondsFormat::Millis, true));
        self
    }

    /// Copy the classification outcome into the record
    ///
    /// The report's own timestamp is used unless one was set explicitly.
    pub fn with_report(mut self, report: &ClassificationReport) -> Self {
        if self.timestamp.is_none() {
            self.timestamp = Some(report.timestamp.clone());
        }
        self.with_field("errorType", report.error_type().as_str())
            .with_field("errorCode", report.code())
            .with_field("errorMessage", report.message())
            .with_field("errorDetails", report.info.details.as_str())
            .with_field("errorSource", report.info.source.as_str())
            .with_field("httpStatus", report.http_status)
            .with_field("retryable", report.retryable)
            .with_field("correlationId", report.correlation_id.as_str())
    }

    pub fn build(self) -> LogRecord {
        LogRecord {
            level: self.level,
            message: self.message,
            timestamp: self.timestamp,
            fields: self.fields,
        }
    }
}

//! Collaborators around the errlens classification engine
//!
//! Small, independent helpers that consume a classification report or sit
//! beside the engine in an integration flow:
//!
//! - **log_record**: immutable field-accumulation builder for structured log records
//! - **validator**: fail-fast sequential field validator over JSON payloads
//! - **query**: ordered, percent-encoded query-string assembly
//! - **token**: access-token expiry arithmetic

pub mod errors;
pub mod log_record;
pub mod query;
pub mod token;
pub mod validator;

pub use errors::{Result, SupportError};
pub use log_record::{LogLevel, LogRecord, LogRecordBuilder};
pub use query::QueryString;
pub use token::TokenExpiry;
pub use validator::{FieldValidator, Rule};

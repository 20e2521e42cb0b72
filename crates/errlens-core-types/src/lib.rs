//! Core types shared across errlens crates
//!
//! This crate provides foundational types used by the classification engine,
//! its collaborators and the logging facility:
//!
//! - **Correlation types**: CorrelationId
//! - **Environment seams**: Clock and IdSource, injectable for deterministic tests
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod environment;
pub mod schema;

pub use correlation::CorrelationId;
pub use environment::{Clock, Environment, FixedClock, IdSource, SequenceIds, SystemClock, UuidV7Ids};

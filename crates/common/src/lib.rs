//! Shared utilities, configuration, and error handling for Jobly
//!
//! This crate provides common functionality used across the Jobly application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Parameterized SQL fragment builders (partial updates, dynamic filters)
//! - Request extractors

pub mod config;
pub mod error;
pub mod extractors;
pub mod sql;

pub use error::{Error, Result};
pub use extractors::ValidatedJson;
pub use sql::{bind_values, sql_for_partial_update, PartialUpdate, Predicates, SqlValue};

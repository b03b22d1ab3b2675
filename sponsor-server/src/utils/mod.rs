//! Utilities
//!
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - presence and length checks for request payloads

pub mod logger;
pub mod validation;

// Re-export error types from shared
pub use shared::error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};

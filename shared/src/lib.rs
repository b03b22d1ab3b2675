//! Shared types for the sponsorship manager
//!
//! Domain models, the unified error system and rupee formatting used by
//! both the server and the client crates.

pub mod error;
pub mod models;
pub mod money;

// Re-exports
pub use axum::Json;
pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};

use thiserror::Error;

use crate::store::StoreError;

/// Startup and serving errors
///
/// Request-level failures use [`shared::error::AppError`]; this type covers
/// what can go wrong before or around the HTTP loop.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load data: {0}")]
    Storage(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;

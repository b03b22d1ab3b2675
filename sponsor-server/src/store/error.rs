use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Collection a record lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Sponsor,
    Deliverable,
    Template,
    Tier,
    MarketplaceList,
}

impl Resource {
    pub const fn label(&self) -> &'static str {
        match self {
            Resource::Sponsor => "Sponsor",
            Resource::Deliverable => "Deliverable",
            Resource::Template => "Template",
            Resource::Tier => "Tier",
            Resource::MarketplaceList => "Marketplace list",
        }
    }

    const fn not_found_code(&self) -> ErrorCode {
        match self {
            Resource::Sponsor => ErrorCode::SponsorNotFound,
            Resource::Deliverable => ErrorCode::DeliverableNotFound,
            Resource::Template => ErrorCode::TemplateNotFound,
            Resource::Tier => ErrorCode::TierNotFound,
            Resource::MarketplaceList => ErrorCode::ListNotFound,
        }
    }
}

/// Record store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{} not found: {id}", .resource.label())]
    NotFound { resource: Resource, id: String },

    #[error("{} already exists: {id}", .resource.label())]
    Duplicate { resource: Resource, id: String },

    #[error("Data file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(resource: Resource, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            resource,
            id: id.into(),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { resource, id } => {
                AppError::new(resource.not_found_code()).with_detail("id", id)
            }
            StoreError::Duplicate { resource, id } => {
                AppError::already_exists(format!("{} {}", resource.label(), id))
                    .with_detail("id", id)
            }
            StoreError::Io(e) => {
                tracing::error!(error = %e, "Data file write failed");
                AppError::storage("Failed to save data")
            }
            StoreError::Serialization(e) => {
                tracing::error!(error = %e, "Data serialization failed");
                AppError::storage("Failed to save data")
            }
        }
    }
}

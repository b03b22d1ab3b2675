//! Sponsor Client - HTTP client for the sponsor server
//!
//! - [`HttpClient`]: JSON requests against one base URL
//! - [`SponsorApi`]: typed operations with a read cache that mutations
//!   invalidate
//! - [`SponsorRowState`]: view/edit/save state for one sponsor row

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod row;

pub use api::{HealthStatus, SponsorApi};
pub use cache::QueryCache;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use row::{RowMode, SponsorDraft, SponsorRowState};

// Re-export shared types for convenience
pub use shared::models;
pub use shared::{ErrorBody, ErrorCode};

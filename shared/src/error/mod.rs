//! Error codes and the request-level error type
//!
//! - [`ErrorCode`]: numeric code per failure, grouped by domain
//! - [`ErrorCategory`]: the domain a code belongs to
//! - [`AppError`]: code + message + optional details
//! - [`ErrorBody`]: JSON shape of every error response
//!
//! | Range | Domain |
//! |-------|--------|
//! | 0xxx | General (validation, not found, conflict) |
//! | 1xxx | Sponsors |
//! | 2xxx | Deliverables |
//! | 3xxx | Templates and outreach email |
//! | 4xxx | Sponsorship tiers |
//! | 5xxx | Marketplace |
//! | 9xxx | System |
//!
//! ```
//! use shared::error::{AppError, ErrorBody};
//!
//! let err = AppError::required(&["name", "email"]);
//! assert_eq!(err.message, "name and email are required");
//! assert_eq!(ErrorBody::from(&err).code, 7);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};

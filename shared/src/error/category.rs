//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Sponsor errors
/// - 2xxx: Deliverable errors
/// - 3xxx: Template and outreach errors
/// - 4xxx: Tier errors
/// - 5xxx: Marketplace errors
/// - 6xxx..: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Sponsor errors (1xxx)
    Sponsor,
    /// Deliverable errors (2xxx)
    Deliverable,
    /// Template and outreach errors (3xxx)
    Outreach,
    /// Tier errors (4xxx)
    Tier,
    /// Marketplace errors (5xxx)
    Marketplace,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Sponsor,
            2000..3000 => Self::Deliverable,
            3000..4000 => Self::Outreach,
            4000..5000 => Self::Tier,
            5000..6000 => Self::Marketplace,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Sponsor => "sponsor",
            Self::Deliverable => "deliverable",
            Self::Outreach => "outreach",
            Self::Tier => "tier",
            Self::Marketplace => "marketplace",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

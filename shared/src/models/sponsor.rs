//! Sponsor Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};

/// Sponsor pipeline status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SponsorStatus {
    #[default]
    #[serde(rename = "Not Contacted")]
    NotContacted,
    #[serde(rename = "Contacted")]
    Contacted,
    #[serde(rename = "Interested")]
    Interested,
    #[serde(rename = "Closed")]
    Closed,
    #[serde(rename = "Ghosted")]
    Ghosted,
}

impl SponsorStatus {
    pub const ALL: [SponsorStatus; 5] = [
        SponsorStatus::NotContacted,
        SponsorStatus::Contacted,
        SponsorStatus::Interested,
        SponsorStatus::Closed,
        SponsorStatus::Ghosted,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SponsorStatus::NotContacted => "Not Contacted",
            SponsorStatus::Contacted => "Contacted",
            SponsorStatus::Interested => "Interested",
            SponsorStatus::Closed => "Closed",
            SponsorStatus::Ghosted => "Ghosted",
        }
    }
}

impl fmt::Display for SponsorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; `not_contacted` and `not-contacted` are accepted too.
impl FromStr for SponsorStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        SponsorStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::InvalidStatus,
                    format!("Invalid status: {}", s.trim()),
                )
                .with_detail(
                    "allowed",
                    SponsorStatus::ALL
                        .iter()
                        .map(|st| st.as_str())
                        .collect::<Vec<_>>(),
                )
            })
    }
}

/// Sponsorship tier a sponsor is pitched at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SponsorTier {
    #[default]
    Bronze,
    Silver,
    Gold,
    Title,
}

impl SponsorTier {
    pub const ALL: [SponsorTier; 4] = [
        SponsorTier::Bronze,
        SponsorTier::Silver,
        SponsorTier::Gold,
        SponsorTier::Title,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SponsorTier::Bronze => "bronze",
            SponsorTier::Silver => "silver",
            SponsorTier::Gold => "gold",
            SponsorTier::Title => "title",
        }
    }
}

impl fmt::Display for SponsorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SponsorTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SponsorTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::InvalidTier, format!("Invalid tier: {trimmed}"))
            })
    }
}

/// Sponsor contact record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub tier: SponsorTier,
    #[serde(default)]
    pub status: SponsorStatus,
    #[serde(default)]
    pub notes: String,
    /// Marketplace list the contact was imported from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Set when an outreach email was delivered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create sponsor payload
///
/// Enumerated fields stay strings so an unknown value can be reported
/// with its own error code instead of a generic body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Update sponsor payload (shallow merge)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Response of `DELETE /api/sponsors/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedSponsor {
    pub deleted_sponsor: Sponsor,
}

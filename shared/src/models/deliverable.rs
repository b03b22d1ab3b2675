//! Deliverable Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};

/// Deliverable progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeliverableStatus {
    #[default]
    #[serde(rename = "Pending", alias = "pending", alias = "Not Started")]
    Pending,
    #[serde(rename = "In Progress", alias = "in progress")]
    InProgress,
    #[serde(rename = "Done", alias = "done", alias = "Completed")]
    Done,
}

impl DeliverableStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DeliverableStatus::Pending => "Pending",
            DeliverableStatus::InProgress => "In Progress",
            DeliverableStatus::Done => "Done",
        }
    }

    pub const fn is_done(&self) -> bool {
        matches!(self, DeliverableStatus::Done)
    }
}

impl fmt::Display for DeliverableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliverableStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "pending" | "not started" | "todo" => Ok(DeliverableStatus::Pending),
            "in progress" => Ok(DeliverableStatus::InProgress),
            "done" | "completed" | "complete" => Ok(DeliverableStatus::Done),
            _ => Err(AppError::with_message(
                ErrorCode::InvalidStatus,
                format!("Invalid deliverable status: {}", s.trim()),
            )
            .with_detail("allowed", vec!["Pending", "In Progress", "Done"])),
        }
    }
}

/// Parse a `YYYY-MM-DD` due date.
pub fn parse_due_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::new(ErrorCode::InvalidDueDate).with_detail("dueDate", value))
}

/// Something owed to a sponsor (logo placement, booth, social post, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    pub id: String,
    /// Weak reference, never checked against the sponsor collection
    pub sponsor_id: String,
    #[serde(alias = "task")]
    pub title: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: DeliverableStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create deliverable payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_id: Option<String>,
    #[serde(alias = "task", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Update deliverable payload (shallow merge)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_id: Option<String>,
    #[serde(alias = "task", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedDeliverable {
    pub deleted_deliverable: Deliverable,
}

//! Activity Log Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of entries returned by `GET /api/activity`
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Activity log entry (append-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn now(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            created_at: Utc::now(),
        }
    }
}

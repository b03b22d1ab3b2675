//! Settings document

use serde::{Deserialize, Serialize};

use super::{ActivityEntry, EmailTemplate, PurchasedList, Tier};

/// Everything outside the sponsor and deliverable collections.
///
/// Stored under the `settings` key of the data file and returned as-is by
/// `GET /api/settings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub templates: Vec<EmailTemplate>,
    #[serde(default)]
    pub tiers: Vec<Tier>,
    #[serde(default)]
    pub activity: Vec<ActivityEntry>,
    #[serde(default)]
    pub purchased_lists: Vec<PurchasedList>,
}

//! Sponsorship Tier Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::PriceInput;

/// Settings-level sponsorship package (e.g. "Gold", ₹10,000)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub id: String,
    pub name: String,
    /// Whole rupees
    #[serde(
        alias = "minimumAmount",
        alias = "value",
        deserialize_with = "crate::money::deserialize_price"
    )]
    pub price: u64,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Tier {
    /// Tier names match sponsor tiers case-insensitively ("Gold" ~ gold)
    pub fn matches(&self, tier: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(tier.trim())
    }
}

/// Create tier payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(alias = "minimumAmount", alias = "value", skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Update tier payload (shallow merge)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(alias = "minimumAmount", alias = "value", skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedTier {
    pub deleted_tier: Tier,
}

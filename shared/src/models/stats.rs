//! Dashboard statistics and tier reports

use serde::{Deserialize, Serialize};

/// `GET /api/stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorStats {
    pub total_sponsors: usize,
    pub not_contacted: usize,
    pub contacted: usize,
    pub interested: usize,
    pub closed: usize,
    pub ghosted: usize,
    pub total_deliverables: usize,
    pub completed_deliverables: usize,
    /// Rounded percentage of deliverables marked Done (0 when there are none)
    pub deliverable_completion: u32,
    /// Sum of closed sponsors' tier prices, e.g. "₹2,35,000"
    pub total_raised: String,
}

/// Per-tier row of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierBreakdown {
    pub tier: String,
    pub count: usize,
    /// Whole rupees
    pub amount: u64,
}

/// `GET /api/reports`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorReport {
    /// Whole rupees raised from closed sponsors
    pub total_amount: u64,
    /// Number of closed sponsors
    pub total_sponsors: usize,
    pub tier_breakdown: Vec<TierBreakdown>,
}

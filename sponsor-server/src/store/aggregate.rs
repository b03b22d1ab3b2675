//! Dashboard statistics and tier reports derived from the document

use shared::models::{
    Deliverable, Sponsor, SponsorReport, SponsorStats, SponsorStatus, SponsorTier, Tier,
    TierBreakdown,
};
use shared::money::format_inr;

/// Price of the tier named like `tier`; unmatched tiers are worth nothing
fn tier_price(tiers: &[Tier], tier: SponsorTier) -> u64 {
    tiers
        .iter()
        .find(|t| t.matches(tier.as_str()))
        .map(|t| t.price)
        .unwrap_or(0)
}

pub fn compute_stats(
    sponsors: &[Sponsor],
    deliverables: &[Deliverable],
    tiers: &[Tier],
) -> SponsorStats {
    let count = |status: SponsorStatus| sponsors.iter().filter(|s| s.status == status).count();

    let completed = deliverables.iter().filter(|d| d.status.is_done()).count();
    let completion = if deliverables.is_empty() {
        0
    } else {
        ((completed as f64 / deliverables.len() as f64) * 100.0).round() as u32
    };

    let raised: u64 = sponsors
        .iter()
        .filter(|s| s.status == SponsorStatus::Closed)
        .map(|s| tier_price(tiers, s.tier))
        .fold(0, u64::saturating_add);

    SponsorStats {
        total_sponsors: sponsors.len(),
        not_contacted: count(SponsorStatus::NotContacted),
        contacted: count(SponsorStatus::Contacted),
        interested: count(SponsorStatus::Interested),
        closed: count(SponsorStatus::Closed),
        ghosted: count(SponsorStatus::Ghosted),
        total_deliverables: deliverables.len(),
        completed_deliverables: completed,
        deliverable_completion: completion,
        total_raised: format_inr(raised),
    }
}

/// Closed sponsors grouped by tier, in tier order; empty tiers are omitted
pub fn compute_report(sponsors: &[Sponsor], tiers: &[Tier]) -> SponsorReport {
    let closed: Vec<&Sponsor> = sponsors
        .iter()
        .filter(|s| s.status == SponsorStatus::Closed)
        .collect();

    let tier_breakdown: Vec<TierBreakdown> = SponsorTier::ALL
        .into_iter()
        .filter_map(|tier| {
            let count = closed.iter().filter(|s| s.tier == tier).count();
            (count > 0).then(|| TierBreakdown {
                tier: tier.as_str().to_string(),
                count,
                amount: tier_price(tiers, tier).saturating_mul(count as u64),
            })
        })
        .collect();

    SponsorReport {
        total_amount: tier_breakdown
            .iter()
            .map(|b| b.amount)
            .fold(0, u64::saturating_add),
        total_sponsors: closed.len(),
        tier_breakdown,
    }
}

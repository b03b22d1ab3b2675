//! Typed operations over the sponsor server API
//!
//! Reads go through [`QueryCache`]; a successful mutation invalidates the
//! queries it can change so the next read refetches. A failed mutation
//! leaves the cache alone and returns the error.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use shared::models::{
    ActivityEntry, DeletedDeliverable, DeletedSponsor, DeletedTemplate, DeletedTier, Deliverable,
    DeliverableCreate, DeliverableUpdate, EmailTemplate, ImportRequest, ImportResult,
    MarketplaceList, OutreachResult, PurchasedList, SendEmailRequest, SendEmailResult,
    SendToUncontactedRequest, Settings, Sponsor, SponsorCreate, SponsorReport, SponsorStats,
    SponsorUpdate, TemplateCreate, Tier, TierCreate, TierUpdate,
};

use crate::{ClientConfig, ClientResult, HttpClient, QueryCache};

/// Query paths, also the cache keys
pub mod keys {
    pub const SPONSORS: &str = "/api/sponsors";
    pub const DELIVERABLES: &str = "/api/deliverables";
    pub const TEMPLATES: &str = "/api/templates";
    pub const TIERS: &str = "/api/tiers";
    pub const MARKETPLACE: &str = "/api/marketplace";
    pub const LISTS: &str = "/api/lists";
    pub const STATS: &str = "/api/stats";
    pub const REPORTS: &str = "/api/reports";
    pub const ACTIVITY: &str = "/api/activity";
    pub const SETTINGS: &str = "/api/settings";

    pub fn sponsor_deliverables(sponsor_id: &str) -> String {
        format!("{SPONSORS}/{sponsor_id}/deliverables")
    }
}

use keys::*;

const SPONSOR_WRITES: &[&str] = &[SPONSORS, STATS, ACTIVITY, REPORTS, SETTINGS];
const DELIVERABLE_WRITES: &[&str] = &[DELIVERABLES, SPONSORS, STATS, ACTIVITY, SETTINGS];
const TEMPLATE_WRITES: &[&str] = &[TEMPLATES, SETTINGS];
const TIER_WRITES: &[&str] = &[TIERS, STATS, REPORTS, SETTINGS];
const PURCHASE_WRITES: &[&str] = &[LISTS, ACTIVITY, SETTINGS];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

/// Sponsor server API with a read cache
#[derive(Debug)]
pub struct SponsorApi {
    http: HttpClient,
    cache: QueryCache,
}

impl SponsorApi {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_http(HttpClient::new(config)?))
    }

    pub fn with_http(http: HttpClient) -> Self {
        Self {
            http,
            cache: QueryCache::new(),
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    async fn query<T: DeserializeOwned + Serialize>(&self, path: &str) -> ClientResult<T> {
        if let Some(hit) = self.cache.get(path) {
            return Ok(hit);
        }
        let fresh: T = self.http.get(path).await?;
        self.cache.insert(path, &fresh);
        Ok(fresh)
    }

    fn invalidate<T>(&self, result: ClientResult<T>, keys: &[&str]) -> ClientResult<T> {
        if result.is_ok() {
            self.cache.invalidate(keys);
        }
        result
    }

    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.http.get("/api/health").await
    }

    // ========== Sponsors ==========

    pub async fn sponsors(&self) -> ClientResult<Vec<Sponsor>> {
        self.query(SPONSORS).await
    }

    pub async fn sponsor_deliverables(&self, sponsor_id: &str) -> ClientResult<Vec<Deliverable>> {
        self.query(&sponsor_deliverables(sponsor_id)).await
    }

    pub async fn create_sponsor(&self, body: &SponsorCreate) -> ClientResult<Sponsor> {
        let result = self.http.post(SPONSORS, body).await;
        self.invalidate(result, SPONSOR_WRITES)
    }

    pub async fn update_sponsor(&self, id: &str, body: &SponsorUpdate) -> ClientResult<Sponsor> {
        let result = self.http.patch(&format!("{SPONSORS}/{id}"), body).await;
        self.invalidate(result, SPONSOR_WRITES)
    }

    pub async fn delete_sponsor(&self, id: &str) -> ClientResult<Sponsor> {
        let result = self
            .http
            .delete::<DeletedSponsor>(&format!("{SPONSORS}/{id}"))
            .await
            .map(|d| d.deleted_sponsor);
        self.invalidate(result, SPONSOR_WRITES)
    }

    // ========== Deliverables ==========

    pub async fn deliverables(&self) -> ClientResult<Vec<Deliverable>> {
        self.query(DELIVERABLES).await
    }

    pub async fn create_deliverable(&self, body: &DeliverableCreate) -> ClientResult<Deliverable> {
        let result = self.http.post(DELIVERABLES, body).await;
        self.invalidate(result, DELIVERABLE_WRITES)
    }

    pub async fn update_deliverable(
        &self,
        id: &str,
        body: &DeliverableUpdate,
    ) -> ClientResult<Deliverable> {
        let result = self.http.patch(&format!("{DELIVERABLES}/{id}"), body).await;
        self.invalidate(result, DELIVERABLE_WRITES)
    }

    pub async fn delete_deliverable(&self, id: &str) -> ClientResult<Deliverable> {
        let result = self
            .http
            .delete::<DeletedDeliverable>(&format!("{DELIVERABLES}/{id}"))
            .await
            .map(|d| d.deleted_deliverable);
        self.invalidate(result, DELIVERABLE_WRITES)
    }

    // ========== Templates ==========

    pub async fn templates(&self) -> ClientResult<Vec<EmailTemplate>> {
        self.query(TEMPLATES).await
    }

    pub async fn create_template(&self, body: &TemplateCreate) -> ClientResult<EmailTemplate> {
        let result = self.http.post(TEMPLATES, body).await;
        self.invalidate(result, TEMPLATE_WRITES)
    }

    pub async fn delete_template(&self, id: &str) -> ClientResult<EmailTemplate> {
        let result = self
            .http
            .delete::<DeletedTemplate>(&format!("{TEMPLATES}/{id}"))
            .await
            .map(|d| d.deleted_template);
        self.invalidate(result, TEMPLATE_WRITES)
    }

    // ========== Tiers ==========

    pub async fn tiers(&self) -> ClientResult<Vec<Tier>> {
        self.query(TIERS).await
    }

    pub async fn create_tier(&self, body: &TierCreate) -> ClientResult<Tier> {
        let result = self.http.post(TIERS, body).await;
        self.invalidate(result, TIER_WRITES)
    }

    pub async fn update_tier(&self, id: &str, body: &TierUpdate) -> ClientResult<Tier> {
        let result = self.http.patch(&format!("{TIERS}/{id}"), body).await;
        self.invalidate(result, TIER_WRITES)
    }

    pub async fn delete_tier(&self, id: &str) -> ClientResult<Tier> {
        let result = self
            .http
            .delete::<DeletedTier>(&format!("{TIERS}/{id}"))
            .await
            .map(|d| d.deleted_tier);
        self.invalidate(result, TIER_WRITES)
    }

    // ========== Marketplace ==========

    pub async fn marketplace(&self) -> ClientResult<Vec<MarketplaceList>> {
        self.query(MARKETPLACE).await
    }

    pub async fn purchased_lists(&self) -> ClientResult<Vec<PurchasedList>> {
        self.query(LISTS).await
    }

    pub async fn purchase_list(&self, id: &str) -> ClientResult<PurchasedList> {
        let result = self
            .http
            .post_empty(&format!("{MARKETPLACE}/{id}/purchase"))
            .await;
        self.invalidate(result, PURCHASE_WRITES)
    }

    pub async fn import_sponsors(&self, body: &ImportRequest) -> ClientResult<ImportResult> {
        let result = self.http.post(&format!("{LISTS}/import"), body).await;
        self.invalidate(result, SPONSOR_WRITES)
    }

    // ========== Dashboard ==========

    pub async fn stats(&self) -> ClientResult<SponsorStats> {
        self.query(STATS).await
    }

    pub async fn report(&self) -> ClientResult<SponsorReport> {
        self.query(REPORTS).await
    }

    pub async fn activity(&self) -> ClientResult<Vec<ActivityEntry>> {
        self.query(ACTIVITY).await
    }

    pub async fn settings(&self) -> ClientResult<Settings> {
        self.query(SETTINGS).await
    }

    // ========== Email ==========

    /// Not cached and invalidates nothing
    pub async fn send_email(&self, body: &SendEmailRequest) -> ClientResult<SendEmailResult> {
        self.http.post("/api/send-email", body).await
    }

    pub async fn send_to_uncontacted(
        &self,
        body: &SendToUncontactedRequest,
    ) -> ClientResult<OutreachResult> {
        let result = self.http.post("/api/send-to-uncontacted", body).await;
        self.invalidate(result, SPONSOR_WRITES)
    }
}

//! Record Store
//!
//! Holds sponsors, deliverables and the settings document (templates,
//! tiers, activity log, purchased lists) behind one `RwLock`, plus the
//! read-only marketplace catalog. Every mutation happens inside a single
//! short critical section; in file-backed mode the whole document is
//! written afterwards.
//!
//! Collections keep insertion order. Reads hand out clones.

pub mod aggregate;
pub mod catalog;
mod document;
mod error;

pub use document::{DataDocument, FileBackend};
pub use error::{Resource, StoreError, StoreResult};

use std::path::Path;

use chrono::Utc;
use parking_lot::RwLock;
use shared::models::{
    ActivityEntry, Deliverable, DeliverableStatus, EmailTemplate, MarketplaceList, PurchasedList,
    Settings, Sponsor, SponsorReport, SponsorStats, SponsorStatus, Tier,
};

pub struct RecordStore {
    data: RwLock<DataDocument>,
    catalog: Vec<MarketplaceList>,
    backend: Option<FileBackend>,
}

impl RecordStore {
    /// Pure in-memory store
    pub fn in_memory(catalog: Vec<MarketplaceList>) -> Self {
        Self::with_document(DataDocument::default(), catalog)
    }

    /// In-memory store pre-filled with `doc`
    pub fn with_document(doc: DataDocument, catalog: Vec<MarketplaceList>) -> Self {
        Self {
            data: RwLock::new(doc),
            catalog,
            backend: None,
        }
    }

    /// File-backed store; a missing file starts empty
    pub async fn open(path: impl AsRef<Path>, catalog: Vec<MarketplaceList>) -> StoreResult<Self> {
        let backend = FileBackend::new(path.as_ref());
        let doc = backend.load().await?;
        tracing::info!(
            path = %backend.path().display(),
            sponsors = doc.sponsors.len(),
            deliverables = doc.deliverables.len(),
            "Data file loaded"
        );
        Ok(Self {
            data: RwLock::new(doc),
            catalog,
            backend: Some(backend),
        })
    }

    pub fn is_file_backed(&self) -> bool {
        self.backend.is_some()
    }

    /// Write the current document when file-backed
    async fn commit(&self) -> StoreResult<()> {
        match &self.backend {
            Some(backend) => {
                backend
                    .save_with(|| {
                        let doc = self.data.read();
                        serde_json::to_vec_pretty(&*doc)
                    })
                    .await
            }
            None => Ok(()),
        }
    }

    /// Run `f` against a consistent view of the document
    pub fn read<R>(&self, f: impl FnOnce(&DataDocument) -> R) -> R {
        f(&self.data.read())
    }

    // ==================== Sponsors ====================

    pub fn sponsors(&self) -> Vec<Sponsor> {
        self.data.read().sponsors.clone()
    }

    pub fn sponsors_with_status(&self, status: SponsorStatus) -> Vec<Sponsor> {
        self.data
            .read()
            .sponsors
            .iter()
            .filter(|s| s.status == status)
            .cloned()
            .collect()
    }

    pub async fn insert_sponsor(&self, sponsor: Sponsor) -> StoreResult<Sponsor> {
        {
            let mut data = self.data.write();
            if data.sponsors.iter().any(|s| s.id == sponsor.id) {
                return Err(StoreError::Duplicate {
                    resource: Resource::Sponsor,
                    id: sponsor.id,
                });
            }
            data.sponsors.push(sponsor.clone());
            data.log(format!("New sponsor added: {}", sponsor.name));
        }
        self.commit().await?;
        Ok(sponsor)
    }

    /// Apply `patch` to the sponsor and stamp `updatedAt`
    pub async fn update_sponsor(
        &self,
        id: &str,
        patch: impl FnOnce(&mut Sponsor),
    ) -> StoreResult<Sponsor> {
        let updated = {
            let mut data = self.data.write();
            let sponsor = data
                .sponsors
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or_else(|| StoreError::not_found(Resource::Sponsor, id))?;

            let was_closed = sponsor.status == SponsorStatus::Closed;
            patch(sponsor);
            sponsor.updated_at = Some(Utc::now());
            let updated = sponsor.clone();

            if !was_closed && updated.status == SponsorStatus::Closed {
                data.log(format!("Sponsor closed: {}", updated.name));
            }
            updated
        };
        self.commit().await?;
        Ok(updated)
    }

    /// Outreach success: `contactedAt` is stamped and a sponsor still
    /// "Not Contacted" becomes "Contacted". A status changed while the send
    /// was in flight is kept.
    pub async fn mark_contacted(&self, id: &str) -> StoreResult<Sponsor> {
        let updated = {
            let mut data = self.data.write();
            let sponsor = data
                .sponsors
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or_else(|| StoreError::not_found(Resource::Sponsor, id))?;
            if sponsor.status == SponsorStatus::NotContacted {
                sponsor.status = SponsorStatus::Contacted;
            }
            sponsor.contacted_at = Some(Utc::now());
            sponsor.clone()
        };
        self.commit().await?;
        Ok(updated)
    }

    pub async fn remove_sponsor(&self, id: &str) -> StoreResult<Sponsor> {
        let removed = {
            let mut data = self.data.write();
            let index = data
                .sponsors
                .iter()
                .position(|s| s.id == id)
                .ok_or_else(|| StoreError::not_found(Resource::Sponsor, id))?;
            let removed = data.sponsors.remove(index);
            data.log(format!("Sponsor removed: {}", removed.name));
            removed
        };
        self.commit().await?;
        Ok(removed)
    }

    /// Append imported sponsors in one step
    pub async fn import_sponsors(&self, sponsors: Vec<Sponsor>, source: &str) -> StoreResult<usize> {
        let added = sponsors.len();
        {
            let mut data = self.data.write();
            data.sponsors.extend(sponsors);
            data.log(format!("Imported {added} sponsors from {source}"));
        }
        self.commit().await?;
        Ok(added)
    }

    // ==================== Deliverables ====================

    pub fn deliverables(&self) -> Vec<Deliverable> {
        self.data.read().deliverables.clone()
    }

    pub fn deliverables_for(&self, sponsor_id: &str) -> Vec<Deliverable> {
        self.data
            .read()
            .deliverables
            .iter()
            .filter(|d| d.sponsor_id == sponsor_id)
            .cloned()
            .collect()
    }

    pub async fn insert_deliverable(&self, deliverable: Deliverable) -> StoreResult<Deliverable> {
        {
            let mut data = self.data.write();
            if data.deliverables.iter().any(|d| d.id == deliverable.id) {
                return Err(StoreError::Duplicate {
                    resource: Resource::Deliverable,
                    id: deliverable.id,
                });
            }
            data.deliverables.push(deliverable.clone());
            data.log(format!("Deliverable added: {}", deliverable.title));
        }
        self.commit().await?;
        Ok(deliverable)
    }

    pub async fn update_deliverable(
        &self,
        id: &str,
        patch: impl FnOnce(&mut Deliverable),
    ) -> StoreResult<Deliverable> {
        let updated = {
            let mut data = self.data.write();
            let deliverable = data
                .deliverables
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or_else(|| StoreError::not_found(Resource::Deliverable, id))?;

            let was_done = deliverable.status == DeliverableStatus::Done;
            patch(deliverable);
            deliverable.updated_at = Some(Utc::now());
            let updated = deliverable.clone();

            if !was_done && updated.status.is_done() {
                data.log(format!("Deliverable completed: {}", updated.title));
            }
            updated
        };
        self.commit().await?;
        Ok(updated)
    }

    pub async fn remove_deliverable(&self, id: &str) -> StoreResult<Deliverable> {
        let removed = {
            let mut data = self.data.write();
            let index = data
                .deliverables
                .iter()
                .position(|d| d.id == id)
                .ok_or_else(|| StoreError::not_found(Resource::Deliverable, id))?;
            data.deliverables.remove(index)
        };
        self.commit().await?;
        Ok(removed)
    }

    // ==================== Templates ====================

    pub fn templates(&self) -> Vec<EmailTemplate> {
        self.data.read().settings.templates.clone()
    }

    pub fn template(&self, id: &str) -> Option<EmailTemplate> {
        self.data
            .read()
            .settings
            .templates
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    pub async fn insert_template(&self, template: EmailTemplate) -> StoreResult<EmailTemplate> {
        {
            let mut data = self.data.write();
            if data.settings.templates.iter().any(|t| t.id == template.id) {
                return Err(StoreError::Duplicate {
                    resource: Resource::Template,
                    id: template.id,
                });
            }
            data.settings.templates.push(template.clone());
        }
        self.commit().await?;
        Ok(template)
    }

    pub async fn remove_template(&self, id: &str) -> StoreResult<EmailTemplate> {
        let removed = {
            let mut data = self.data.write();
            let index = data
                .settings
                .templates
                .iter()
                .position(|t| t.id == id)
                .ok_or_else(|| StoreError::not_found(Resource::Template, id))?;
            data.settings.templates.remove(index)
        };
        self.commit().await?;
        Ok(removed)
    }

    // ==================== Tiers ====================

    pub fn tiers(&self) -> Vec<Tier> {
        self.data.read().settings.tiers.clone()
    }

    pub async fn insert_tier(&self, tier: Tier) -> StoreResult<Tier> {
        {
            let mut data = self.data.write();
            if data.settings.tiers.iter().any(|t| t.id == tier.id) {
                return Err(StoreError::Duplicate {
                    resource: Resource::Tier,
                    id: tier.id,
                });
            }
            data.settings.tiers.push(tier.clone());
        }
        self.commit().await?;
        Ok(tier)
    }

    pub async fn update_tier(&self, id: &str, patch: impl FnOnce(&mut Tier)) -> StoreResult<Tier> {
        let updated = {
            let mut data = self.data.write();
            let tier = data
                .settings
                .tiers
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| StoreError::not_found(Resource::Tier, id))?;
            patch(tier);
            tier.updated_at = Some(Utc::now());
            tier.clone()
        };
        self.commit().await?;
        Ok(updated)
    }

    pub async fn remove_tier(&self, id: &str) -> StoreResult<Tier> {
        let removed = {
            let mut data = self.data.write();
            let index = data
                .settings
                .tiers
                .iter()
                .position(|t| t.id == id)
                .ok_or_else(|| StoreError::not_found(Resource::Tier, id))?;
            data.settings.tiers.remove(index)
        };
        self.commit().await?;
        Ok(removed)
    }

    // ==================== Marketplace ====================

    pub fn catalog(&self) -> &[MarketplaceList] {
        &self.catalog
    }

    pub fn catalog_list(&self, id: &str) -> StoreResult<&MarketplaceList> {
        self.catalog
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| StoreError::not_found(Resource::MarketplaceList, id))
    }

    pub fn purchased_lists(&self) -> Vec<PurchasedList> {
        self.data.read().settings.purchased_lists.clone()
    }

    /// Add a catalog list to the library; buying it again returns the
    /// existing entry unchanged.
    pub async fn purchase_list(&self, id: &str) -> StoreResult<PurchasedList> {
        let list = self.catalog_list(id)?.clone();
        let purchased = {
            let mut data = self.data.write();
            if let Some(existing) = data
                .settings
                .purchased_lists
                .iter()
                .find(|p| p.list.id == id)
            {
                return Ok(existing.clone());
            }
            let purchased = PurchasedList {
                list,
                purchased_at: Utc::now(),
            };
            data.settings.purchased_lists.push(purchased.clone());
            data.log(format!("Purchased list: {}", purchased.list.title));
            purchased
        };
        self.commit().await?;
        Ok(purchased)
    }

    // ==================== Activity / aggregates ====================

    pub fn recent_activity(&self) -> Vec<ActivityEntry> {
        self.data.read().recent_activity()
    }

    pub async fn record_activity(&self, title: impl Into<String>) -> StoreResult<()> {
        self.data.write().log(title);
        self.commit().await
    }

    pub fn settings(&self) -> Settings {
        self.data.read().settings.clone()
    }

    pub fn stats(&self) -> SponsorStats {
        self.read(|doc| {
            aggregate::compute_stats(&doc.sponsors, &doc.deliverables, &doc.settings.tiers)
        })
    }

    pub fn report(&self) -> SponsorReport {
        self.read(|doc| aggregate::compute_report(&doc.sponsors, &doc.settings.tiers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::SponsorTier;

    fn sponsor(id: &str, name: &str) -> Sponsor {
        Sponsor {
            id: id.into(),
            name: name.into(),
            email: format!("{id}@example.com"),
            tier: SponsorTier::Bronze,
            status: SponsorStatus::NotContacted,
            notes: String::new(),
            source: None,
            contacted_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id() {
        let store = RecordStore::in_memory(vec![]);
        store.insert_sponsor(sponsor("s1", "Acme")).await.unwrap();
        let err = store.insert_sponsor(sponsor("s1", "Other")).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
        assert_eq!(store.sponsors().len(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_leaves_collection_unchanged() {
        let store = RecordStore::in_memory(vec![]);
        store.insert_sponsor(sponsor("s1", "Acme")).await.unwrap();
        let before = store.sponsors();

        let err = store
            .update_sponsor("missing", |s| s.notes = "x".into())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(store.sponsors(), before);
    }

    #[tokio::test]
    async fn test_closing_a_sponsor_is_logged_once() {
        let store = RecordStore::in_memory(vec![]);
        store.insert_sponsor(sponsor("s1", "Acme")).await.unwrap();
        store
            .update_sponsor("s1", |s| s.status = SponsorStatus::Closed)
            .await
            .unwrap();
        store
            .update_sponsor("s1", |s| s.notes = "signed".into())
            .await
            .unwrap();

        let titles: Vec<_> = store
            .recent_activity()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["Sponsor closed: Acme", "New sponsor added: Acme"]);
    }

    #[tokio::test]
    async fn test_mark_contacted_keeps_newer_status() {
        let store = RecordStore::in_memory(vec![]);
        store.insert_sponsor(sponsor("s1", "Acme")).await.unwrap();
        store.insert_sponsor(sponsor("s2", "Globex")).await.unwrap();
        store
            .update_sponsor("s2", |s| s.status = SponsorStatus::Closed)
            .await
            .unwrap();

        let first = store.mark_contacted("s1").await.unwrap();
        assert_eq!(first.status, SponsorStatus::Contacted);

        let second = store.mark_contacted("s2").await.unwrap();
        assert_eq!(second.status, SponsorStatus::Closed);
        assert!(second.contacted_at.is_some());
    }

    #[tokio::test]
    async fn test_remove_then_remove_again() {
        let store = RecordStore::in_memory(vec![]);
        store.insert_sponsor(sponsor("s1", "Acme")).await.unwrap();
        assert_eq!(store.remove_sponsor("s1").await.unwrap().id, "s1");
        assert!(store.remove_sponsor("s1").await.is_err());
        assert!(store.sponsors().is_empty());
    }

    #[tokio::test]
    async fn test_purchase_is_idempotent() {
        let store = RecordStore::in_memory(catalog::default_catalog());
        let first = store.purchase_list("1").await.unwrap();
        let second = store.purchase_list("1").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(store.purchased_lists().len(), 1);
        assert!(matches!(
            store.purchase_list("nope").await,
            Err(StoreError::NotFound {
                resource: Resource::MarketplaceList,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_file_backed_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");

        let store = RecordStore::open(&path, vec![]).await.unwrap();
        assert!(store.is_file_backed());
        store.insert_sponsor(sponsor("s1", "Acme")).await.unwrap();
        store
            .mark_contacted("s1")
            .await
            .unwrap();
        drop(store);

        let reopened = RecordStore::open(&path, vec![]).await.unwrap();
        let sponsors = reopened.sponsors();
        assert_eq!(sponsors.len(), 1);
        assert_eq!(sponsors[0].status, SponsorStatus::Contacted);
        assert!(sponsors[0].contacted_at.is_some());
        assert_eq!(reopened.recent_activity().len(), 1);
    }
}

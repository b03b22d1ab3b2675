//! Inline edit state for one sponsor row
//!
//! ```text
//! Viewing --begin_edit--> Editing --begin_save--> Saving --ok--> Viewing
//!                            ^  |                    |
//!                            |  +--cancel--> Viewing |
//!                            +-------- error --------+
//! ```
//!
//! A failed save returns to `Editing` with the draft intact and the error
//! kept for display. Cancel reverts the draft to the last saved record.

use shared::models::{Sponsor, SponsorStatus, SponsorTier, SponsorUpdate};

use crate::{ClientError, ClientResult, SponsorApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    Viewing,
    Editing,
    Saving,
}

/// Editable copy of a sponsor's fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorDraft {
    pub name: String,
    pub email: String,
    pub tier: SponsorTier,
    pub status: SponsorStatus,
    pub notes: String,
}

impl From<&Sponsor> for SponsorDraft {
    fn from(s: &Sponsor) -> Self {
        Self {
            name: s.name.clone(),
            email: s.email.clone(),
            tier: s.tier,
            status: s.status,
            notes: s.notes.clone(),
        }
    }
}

impl SponsorDraft {
    /// PATCH body carrying only the fields that differ from `saved`
    pub fn changes(&self, saved: &Sponsor) -> SponsorUpdate {
        let changed = |new: &str, old: &str| (new != old).then(|| new.to_string());
        SponsorUpdate {
            name: changed(&self.name, &saved.name),
            email: changed(&self.email, &saved.email),
            tier: (self.tier != saved.tier).then(|| self.tier.as_str().to_string()),
            status: (self.status != saved.status).then(|| self.status.as_str().to_string()),
            notes: changed(&self.notes, &saved.notes),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SponsorRowState {
    saved: Sponsor,
    draft: SponsorDraft,
    mode: RowMode,
    error: Option<String>,
}

impl SponsorRowState {
    pub fn new(sponsor: Sponsor) -> Self {
        Self {
            draft: SponsorDraft::from(&sponsor),
            saved: sponsor,
            mode: RowMode::Viewing,
            error: None,
        }
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn saved(&self) -> &Sponsor {
        &self.saved
    }

    pub fn draft(&self) -> &SponsorDraft {
        &self.draft
    }

    /// Last save error, cleared by the next successful save or edit
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_edit(&mut self) -> ClientResult<()> {
        self.expect_mode(RowMode::Viewing, "begin_edit")?;
        self.draft = SponsorDraft::from(&self.saved);
        self.error = None;
        self.mode = RowMode::Editing;
        Ok(())
    }

    /// Draft for editing; `None` unless in `Editing`
    pub fn draft_mut(&mut self) -> Option<&mut SponsorDraft> {
        (self.mode == RowMode::Editing).then_some(&mut self.draft)
    }

    pub fn cancel(&mut self) -> ClientResult<()> {
        self.expect_mode(RowMode::Editing, "cancel")?;
        self.draft = SponsorDraft::from(&self.saved);
        self.error = None;
        self.mode = RowMode::Viewing;
        Ok(())
    }

    /// Enter `Saving` and hand back the PATCH body to send
    pub fn begin_save(&mut self) -> ClientResult<SponsorUpdate> {
        self.expect_mode(RowMode::Editing, "begin_save")?;
        self.mode = RowMode::Saving;
        Ok(self.draft.changes(&self.saved))
    }

    /// Apply the outcome of the PATCH started by [`begin_save`](Self::begin_save)
    pub fn finish_save(&mut self, result: ClientResult<Sponsor>) -> ClientResult<&Sponsor> {
        self.expect_mode(RowMode::Saving, "finish_save")?;
        match result {
            Ok(sponsor) => {
                self.draft = SponsorDraft::from(&sponsor);
                self.saved = sponsor;
                self.error = None;
                self.mode = RowMode::Viewing;
                Ok(&self.saved)
            }
            Err(e) => {
                tracing::warn!(sponsor_id = %self.saved.id, error = %e, "Sponsor save failed");
                self.error = Some(e.to_string());
                self.mode = RowMode::Editing;
                Err(e)
            }
        }
    }

    /// Save the draft through `api`
    pub async fn save(&mut self, api: &SponsorApi) -> ClientResult<&Sponsor> {
        let update = self.begin_save()?;
        let id = self.saved.id.clone();
        let result = api.update_sponsor(&id, &update).await;
        self.finish_save(result)
    }

    fn expect_mode(&self, expected: RowMode, action: &str) -> ClientResult<()> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(ClientError::InvalidState(format!(
                "{action} needs {expected:?}, row is {:?}",
                self.mode
            )))
        }
    }
}

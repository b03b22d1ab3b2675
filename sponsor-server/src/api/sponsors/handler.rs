//! Sponsor API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, id_or_new, present, require_fields,
    validate_optional_text, validate_required_text,
};
use shared::models::{
    DeletedSponsor, Deliverable, Sponsor, SponsorCreate, SponsorStatus, SponsorTier, SponsorUpdate,
};

/// GET /api/sponsors - all sponsors in insertion order
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Sponsor>> {
    Json(state.store.sponsors())
}

/// POST /api/sponsors - create a sponsor
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<SponsorCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Sponsor>)> {
    let Json(body) = payload?;
    let sponsor = validate_create(body)?;
    let created = state.store.insert_sponsor(sponsor).await?;
    tracing::info!(sponsor_id = %created.id, name = %created.name, "Sponsor created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/sponsors/{id} - shallow-merge the provided fields
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<SponsorUpdate>, JsonRejection>,
) -> AppResult<Json<Sponsor>> {
    let Json(body) = payload?;
    let patch = SponsorPatch::try_from(body)?;
    let updated = state.store.update_sponsor(&id, |s| patch.apply(s)).await?;
    Ok(Json(updated))
}

/// DELETE /api/sponsors/{id} - remove a sponsor
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedSponsor>> {
    let removed = state.store.remove_sponsor(&id).await?;
    tracing::info!(sponsor_id = %removed.id, "Sponsor deleted");
    Ok(Json(DeletedSponsor {
        deleted_sponsor: removed,
    }))
}

/// GET /api/sponsors/{id}/deliverables - deliverables owed to one sponsor
pub async fn deliverables(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Json<Vec<Deliverable>> {
    Json(state.store.deliverables_for(&id))
}

fn validate_create(body: SponsorCreate) -> AppResult<Sponsor> {
    require_fields(&[("name", &body.name), ("email", &body.email)])?;
    let name = present(&body.name).unwrap_or_default().to_string();
    let email = present(&body.email).unwrap_or_default().to_string();
    validate_required_text(&name, "name", MAX_NAME_LEN)?;
    validate_required_text(&email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&body.notes, "notes", MAX_NOTE_LEN)?;

    let tier = match present(&body.tier) {
        Some(t) => t.parse::<SponsorTier>()?,
        None => SponsorTier::default(),
    };
    let status = match present(&body.status) {
        Some(s) => s.parse::<SponsorStatus>()?,
        None => SponsorStatus::default(),
    };

    Ok(Sponsor {
        id: id_or_new(&body.id),
        name,
        email,
        tier,
        status,
        notes: body.notes.unwrap_or_default(),
        source: None,
        contacted_at: None,
        updated_at: None,
    })
}

/// Validated sponsor update
#[derive(Debug, Default)]
struct SponsorPatch {
    name: Option<String>,
    email: Option<String>,
    tier: Option<SponsorTier>,
    status: Option<SponsorStatus>,
    notes: Option<String>,
}

impl TryFrom<SponsorUpdate> for SponsorPatch {
    type Error = crate::utils::AppError;

    fn try_from(body: SponsorUpdate) -> Result<Self, Self::Error> {
        if let Some(name) = &body.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        if let Some(email) = &body.email {
            validate_required_text(email, "email", MAX_EMAIL_LEN)?;
        }
        validate_optional_text(&body.notes, "notes", MAX_NOTE_LEN)?;

        Ok(Self {
            name: body.name.map(|n| n.trim().to_string()),
            email: body.email.map(|e| e.trim().to_string()),
            tier: body.tier.as_deref().map(str::parse::<SponsorTier>).transpose()?,
            status: body.status.as_deref().map(str::parse::<SponsorStatus>).transpose()?,
            notes: body.notes,
        })
    }
}

impl SponsorPatch {
    fn apply(self, sponsor: &mut Sponsor) {
        if let Some(name) = self.name {
            sponsor.name = name;
        }
        if let Some(email) = self.email {
            sponsor.email = email;
        }
        if let Some(tier) = self.tier {
            sponsor.tier = tier;
        }
        if let Some(status) = self.status {
            sponsor.status = status;
        }
        if let Some(notes) = self.notes {
            sponsor.notes = notes;
        }
    }
}

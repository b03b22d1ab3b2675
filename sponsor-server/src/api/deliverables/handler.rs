//! Deliverable API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{NaiveDate, Utc};

use crate::core::ServerState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, id_or_new, present, require_fields, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{
    DeletedDeliverable, Deliverable, DeliverableCreate, DeliverableStatus, DeliverableUpdate,
    parse_due_date,
};

/// GET /api/deliverables - all deliverables in insertion order
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Deliverable>> {
    Json(state.store.deliverables())
}

/// POST /api/deliverables - create a deliverable
///
/// `sponsorId` is stored as given; it is not checked against the sponsors.
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<DeliverableCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Deliverable>)> {
    let Json(body) = payload?;
    let deliverable = validate_create(body)?;
    let created = state.store.insert_deliverable(deliverable).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/deliverables/{id} - shallow-merge the provided fields
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<DeliverableUpdate>, JsonRejection>,
) -> AppResult<Json<Deliverable>> {
    let Json(body) = payload?;
    let patch = DeliverablePatch::try_from(body)?;
    let updated = state
        .store
        .update_deliverable(&id, |d| patch.apply(d))
        .await?;
    Ok(Json(updated))
}

/// DELETE /api/deliverables/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedDeliverable>> {
    let removed = state.store.remove_deliverable(&id).await?;
    Ok(Json(DeletedDeliverable {
        deleted_deliverable: removed,
    }))
}

fn validate_create(body: DeliverableCreate) -> AppResult<Deliverable> {
    require_fields(&[
        ("sponsorId", &body.sponsor_id),
        ("title", &body.title),
        ("dueDate", &body.due_date),
    ])?;
    let title = present(&body.title).unwrap_or_default().to_string();
    validate_required_text(&title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&body.notes, "notes", MAX_NOTE_LEN)?;

    let due_date = parse_due_date(present(&body.due_date).unwrap_or_default())?;
    let status = match present(&body.status) {
        Some(s) => s.parse::<DeliverableStatus>()?,
        None => DeliverableStatus::default(),
    };

    Ok(Deliverable {
        id: id_or_new(&body.id),
        sponsor_id: present(&body.sponsor_id).unwrap_or_default().to_string(),
        title,
        due_date,
        status,
        notes: body.notes,
        created_at: Utc::now(),
        updated_at: None,
    })
}

/// Validated deliverable update
#[derive(Debug)]
struct DeliverablePatch {
    sponsor_id: Option<String>,
    title: Option<String>,
    due_date: Option<NaiveDate>,
    status: Option<DeliverableStatus>,
    notes: Option<String>,
}

impl TryFrom<DeliverableUpdate> for DeliverablePatch {
    type Error = AppError;

    fn try_from(body: DeliverableUpdate) -> Result<Self, Self::Error> {
        if let Some(title) = &body.title {
            validate_required_text(title, "title", MAX_NAME_LEN)?;
        }
        if let Some(sponsor_id) = &body.sponsor_id {
            validate_required_text(sponsor_id, "sponsorId", MAX_NAME_LEN)?;
        }
        validate_optional_text(&body.notes, "notes", MAX_NOTE_LEN)?;

        Ok(Self {
            sponsor_id: body.sponsor_id.map(|s| s.trim().to_string()),
            title: body.title.map(|t| t.trim().to_string()),
            due_date: body.due_date.as_deref().map(parse_due_date).transpose()?,
            status: body
                .status
                .as_deref()
                .map(str::parse::<DeliverableStatus>)
                .transpose()?,
            notes: body.notes,
        })
    }
}

impl DeliverablePatch {
    fn apply(self, deliverable: &mut Deliverable) {
        if let Some(sponsor_id) = self.sponsor_id {
            deliverable.sponsor_id = sponsor_id;
        }
        if let Some(title) = self.title {
            deliverable.title = title;
        }
        if let Some(due_date) = self.due_date {
            deliverable.due_date = due_date;
        }
        if let Some(status) = self.status {
            deliverable.status = status;
        }
        if let Some(notes) = self.notes {
            deliverable.notes = Some(notes);
        }
    }
}

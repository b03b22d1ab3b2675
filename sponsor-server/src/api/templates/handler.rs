//! Email template API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_HTML_LEN, MAX_NAME_LEN, MAX_SUBJECT_LEN, id_or_new, present, require_fields,
    validate_required_text,
};
use shared::models::{DeletedTemplate, EmailTemplate, TemplateCreate};

/// GET /api/templates
pub async fn list(State(state): State<ServerState>) -> Json<Vec<EmailTemplate>> {
    Json(state.store.templates())
}

/// POST /api/templates - create a template
///
/// The body may use `{{name}}`, substituted per recipient at send time.
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<TemplateCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<EmailTemplate>)> {
    let Json(body) = payload?;
    let template = validate_create(body)?;
    let created = state.store.insert_template(template).await?;
    tracing::info!(template_id = %created.id, name = %created.name, "Template created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /api/templates/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedTemplate>> {
    let removed = state.store.remove_template(&id).await?;
    Ok(Json(DeletedTemplate {
        deleted_template: removed,
    }))
}

fn validate_create(body: TemplateCreate) -> AppResult<EmailTemplate> {
    require_fields(&[
        ("name", &body.name),
        ("subject", &body.subject),
        ("html", &body.html),
    ])?;
    let name = present(&body.name).unwrap_or_default().to_string();
    let subject = present(&body.subject).unwrap_or_default().to_string();
    validate_required_text(&name, "name", MAX_NAME_LEN)?;
    validate_required_text(&subject, "subject", MAX_SUBJECT_LEN)?;

    // Body whitespace is kept as written
    let html = body.html.unwrap_or_default();
    validate_required_text(&html, "html", MAX_HTML_LEN)?;

    Ok(EmailTemplate {
        id: id_or_new(&body.id),
        name,
        subject,
        html,
        created_at: Utc::now(),
    })
}

//! Marketplace API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, present, require_fields, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{
    CsvImportQuery, ImportContact, ImportRequest, ImportResult, MarketplaceList, PurchasedList,
    Sponsor, SponsorStatus, SponsorTier,
};

/// Source tag when neither `source` nor `listId` is given
pub const DEFAULT_IMPORT_SOURCE: &str = "marketplace";

/// GET /api/marketplace - the static catalog
pub async fn catalog(State(state): State<ServerState>) -> Json<Vec<MarketplaceList>> {
    Json(state.store.catalog().to_vec())
}

/// POST /api/marketplace/{id}/purchase - idempotent
pub async fn purchase(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<PurchasedList>> {
    let purchased = state.store.purchase_list(&id).await?;
    Ok(Json(purchased))
}

/// GET /api/lists - purchased lists, oldest first
pub async fn purchased(State(state): State<ServerState>) -> Json<Vec<PurchasedList>> {
    Json(state.store.purchased_lists())
}

/// POST /api/lists/import - add every contact as a new "Not Contacted" sponsor
///
/// The batch is validated as a whole; one bad contact rejects the import.
pub async fn import(
    State(state): State<ServerState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ImportResult>)> {
    let Json(body) = payload?;
    let source = import_source(&state, &body.source, &body.list_id)?;
    let contacts = body.sponsors.unwrap_or_default();
    import_contacts(&state, &contacts, &source).await
}

/// POST /api/lists/import/csv - same as `import`, from an uploaded CSV list
///
/// `source` and `listId` come from the query string.
pub async fn import_csv(
    State(state): State<ServerState>,
    Query(query): Query<CsvImportQuery>,
    body: String,
) -> AppResult<(StatusCode, Json<ImportResult>)> {
    let source = import_source(&state, &query.source, &query.list_id)?;
    let contacts = parse_csv(&body)?;
    import_contacts(&state, &contacts, &source).await
}

/// `source`, else the catalog title of `listId`, else "marketplace"
fn import_source(
    state: &ServerState,
    source: &Option<String>,
    list_id: &Option<String>,
) -> AppResult<String> {
    Ok(match (present(source), present(list_id)) {
        (Some(source), _) => source.to_string(),
        (None, Some(list_id)) => state.store.catalog_list(list_id)?.title.clone(),
        (None, None) => DEFAULT_IMPORT_SOURCE.to_string(),
    })
}

async fn import_contacts(
    state: &ServerState,
    contacts: &[ImportContact],
    source: &str,
) -> AppResult<(StatusCode, Json<ImportResult>)> {
    if contacts.is_empty() {
        return Err(AppError::new(ErrorCode::ImportEmpty));
    }

    let sponsors = contacts
        .iter()
        .enumerate()
        .map(|(index, contact)| {
            to_sponsor(contact, source).map_err(|e| e.with_detail("index", index))
        })
        .collect::<AppResult<Vec<_>>>()?;

    let added_count = state.store.import_sponsors(sponsors, source).await?;
    tracing::info!(added_count, source = %source, "Sponsors imported");
    Ok((StatusCode::CREATED, Json(ImportResult { added_count })))
}

/// Rows of a CSV list with a header row; every row has one field per header
fn parse_csv(text: &str) -> AppResult<Vec<ImportContact>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    reader
        .deserialize::<ImportContact>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or_default();
            AppError::with_message(ErrorCode::InvalidFormat, format!("Invalid CSV: {e}"))
                .with_detail("line", line)
        })
}

fn to_sponsor(contact: &ImportContact, source: &str) -> AppResult<Sponsor> {
    require_fields(&[("name", &contact.name), ("email", &contact.email)])?;
    let name = present(&contact.name).unwrap_or_default().to_string();
    let email = present(&contact.email).unwrap_or_default().to_string();
    validate_required_text(&name, "name", MAX_NAME_LEN)?;
    validate_required_text(&email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&contact.notes, "notes", MAX_NOTE_LEN)?;

    let tier = match present(&contact.tier) {
        Some(t) => t.parse::<SponsorTier>()?,
        None => SponsorTier::default(),
    };

    Ok(Sponsor {
        id: uuid::Uuid::new_v4().to_string(),
        name,
        email,
        tier,
        status: SponsorStatus::NotContacted,
        notes: import_notes(contact),
        source: Some(source.to_string()),
        contacted_at: None,
        updated_at: None,
    })
}

/// Given notes, otherwise "type, location" from the catalog entry
fn import_notes(contact: &ImportContact) -> String {
    if let Some(notes) = present(&contact.notes) {
        return notes.to_string();
    }
    [present(&contact.kind), present(&contact.location)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
}

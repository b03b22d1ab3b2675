//! Tier API Handlers
//!
//! Prices are whole rupees. Requests may send a number or a display
//! string such as "₹25,000"; responses always carry the number.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, id_or_new, present, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{DeletedTier, Tier, TierCreate, TierUpdate};

/// GET /api/tiers
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Tier>> {
    Json(state.store.tiers())
}

/// POST /api/tiers - create a tier
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<TierCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Tier>)> {
    let Json(body) = payload?;
    let tier = validate_create(body)?;
    let created = state.store.insert_tier(tier).await?;
    tracing::info!(tier_id = %created.id, name = %created.name, price = created.price, "Tier created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/tiers/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<TierUpdate>, JsonRejection>,
) -> AppResult<Json<Tier>> {
    let Json(body) = payload?;
    let patch = TierPatch::try_from(body)?;
    let updated = state.store.update_tier(&id, |t| patch.apply(t)).await?;
    Ok(Json(updated))
}

/// DELETE /api/tiers/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedTier>> {
    let removed = state.store.remove_tier(&id).await?;
    Ok(Json(DeletedTier {
        deleted_tier: removed,
    }))
}

fn validate_create(body: TierCreate) -> AppResult<Tier> {
    let name = present(&body.name);
    let missing: Vec<&str> = [
        name.is_none().then_some("name"),
        body.price.is_none().then_some("price"),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !missing.is_empty() {
        return Err(AppError::required(&missing));
    }

    let name = name.unwrap_or_default().to_string();
    validate_required_text(&name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&body.description, "description", MAX_NOTE_LEN)?;
    let price = match &body.price {
        Some(p) => p.to_rupees()?,
        None => 0,
    };

    Ok(Tier {
        id: id_or_new(&body.id),
        name,
        price,
        benefits: body.benefits.unwrap_or_default(),
        description: body.description,
        updated_at: None,
    })
}

/// Validated tier update
#[derive(Debug)]
struct TierPatch {
    name: Option<String>,
    price: Option<u64>,
    benefits: Option<Vec<String>>,
    description: Option<String>,
}

impl TryFrom<TierUpdate> for TierPatch {
    type Error = AppError;

    fn try_from(body: TierUpdate) -> Result<Self, Self::Error> {
        if let Some(name) = &body.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        validate_optional_text(&body.description, "description", MAX_NOTE_LEN)?;

        Ok(Self {
            name: body.name.map(|n| n.trim().to_string()),
            price: body.price.as_ref().map(|p| p.to_rupees()).transpose()?,
            benefits: body.benefits,
            description: body.description,
        })
    }
}

impl TierPatch {
    fn apply(self, tier: &mut Tier) {
        if let Some(name) = self.name {
            tier.name = name;
        }
        if let Some(price) = self.price {
            tier.price = price;
        }
        if let Some(benefits) = self.benefits {
            tier.benefits = benefits;
        }
        if let Some(description) = self.description {
            tier.description = Some(description);
        }
    }
}

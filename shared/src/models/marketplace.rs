//! Marketplace Model
//!
//! Read-only catalog of purchasable sponsor-contact lists, the user's
//! library of purchased lists, and the import payload that copies list
//! contacts into the sponsor collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prospective sponsor embedded in a catalog list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceContact {
    pub name: String,
    pub email: String,
    /// Company category, e.g. "Corporate"
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
}

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceList {
    pub id: String,
    pub title: String,
    pub description: String,
    pub seller: String,
    /// Display price, e.g. "₹2,500" or "Free"
    pub price: String,
    pub tags: Vec<String>,
    pub sponsors: Vec<MarketplaceContact>,
}

/// A catalog entry in the user's library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedList {
    #[serde(flatten)]
    pub list: MarketplaceList,
    pub purchased_at: DateTime<Utc>,
}

/// Contact inside an import request
///
/// Only `name` and `email` are required; everything else is carried over
/// when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl From<&MarketplaceContact> for ImportContact {
    fn from(c: &MarketplaceContact) -> Self {
        Self {
            name: Some(c.name.clone()),
            email: Some(c.email.clone()),
            tier: None,
            notes: None,
            kind: Some(c.kind.clone()),
            location: Some(c.location.clone()),
        }
    }
}

/// `POST /api/lists/import` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsors: Option<Vec<ImportContact>>,
    /// Label stored on each imported sponsor's `source`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Catalog list the contacts came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
}

/// Query string of `POST /api/lists/import/csv`
///
/// The request body is CSV text with a header row naming the columns
/// (`name,email` required; `tier`, `notes`, `type`, `location` optional).
/// Every row carries one field per header; empty fields count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvImportQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub added_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_type_field() {
        let c: MarketplaceContact = serde_json::from_str(
            r#"{"name":"Acme","email":"hi@acme.com","type":"Corporate","location":"Pune"}"#,
        )
        .unwrap();
        assert_eq!(c.kind, "Corporate");
        assert_eq!(serde_json::to_value(&c).unwrap()["type"], "Corporate");
    }

    #[test]
    fn test_purchased_list_is_flat() {
        let p = PurchasedList {
            list: MarketplaceList {
                id: "1".into(),
                title: "Local Business Sponsors".into(),
                description: String::new(),
                seller: "LocalBiz Hub".into(),
                price: "₹900".into(),
                tags: vec!["Local".into()],
                sponsors: vec![],
            },
            purchased_at: DateTime::from_timestamp(0, 0).unwrap(),
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["title"], "Local Business Sponsors");
        assert!(json.get("purchasedAt").is_some());
        assert!(json.get("list").is_none());
    }
}

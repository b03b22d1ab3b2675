//! Email Template Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outreach email template
///
/// `html` may contain `{{variable}}` placeholders; they are never validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplate {
    pub id: String,
    pub name: String,
    pub subject: String,
    #[serde(alias = "body")]
    pub html: String,
    pub created_at: DateTime<Utc>,
}

/// Create template payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(alias = "body", skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedTemplate {
    pub deleted_template: EmailTemplate,
}

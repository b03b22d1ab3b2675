//! Outreach request/response payloads

use serde::{Deserialize, Serialize};

/// `POST /api/send-to-uncontacted`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendToUncontactedRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Sender address; the configured default is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
}

/// Per-recipient failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachFailure {
    /// Recipient address
    pub sponsor: String,
    pub sponsor_id: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachResult {
    pub emails_sent: usize,
    /// Number of sponsors that were "Not Contacted" when the run started
    pub total_sponsors: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<OutreachFailure>,
}

/// `POST /api/send-email`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailResult {
    pub success: bool,
}

//! Outreach API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::core::ServerState;
use crate::email::EmailMessage;
use crate::outreach;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_HTML_LEN, MAX_SUBJECT_LEN, present, require_fields,
    validate_required_text,
};
use shared::models::{OutreachResult, SendEmailRequest, SendEmailResult, SendToUncontactedRequest};

/// POST /api/send-email - send one message
pub async fn send_email(
    State(state): State<ServerState>,
    payload: Result<Json<SendEmailRequest>, JsonRejection>,
) -> AppResult<Json<SendEmailResult>> {
    let Json(body) = payload?;
    let message = validate_message(body, state.default_sender())?;

    state.email.send(&message).await?;
    tracing::info!(to = %message.to, sender = state.email.name(), "Email sent");
    Ok(Json(SendEmailResult { success: true }))
}

/// POST /api/send-to-uncontacted - template every "Not Contacted" sponsor
pub async fn send_to_uncontacted(
    State(state): State<ServerState>,
    payload: Result<Json<SendToUncontactedRequest>, JsonRejection>,
) -> AppResult<Json<OutreachResult>> {
    let Json(body) = payload?;
    require_fields(&[("templateId", &body.template_id)])?;
    let template_id = present(&body.template_id).unwrap_or_default();
    let from = present(&body.sender).unwrap_or(state.default_sender());

    let result =
        outreach::send_to_uncontacted(&state.store, state.email.as_ref(), template_id, from)
            .await?;
    Ok(Json(result))
}

fn validate_message(body: SendEmailRequest, default_sender: &str) -> AppResult<EmailMessage> {
    require_fields(&[
        ("to", &body.to),
        ("subject", &body.subject),
        ("html", &body.html),
    ])?;
    let to = present(&body.to).unwrap_or_default().to_string();
    let subject = present(&body.subject).unwrap_or_default().to_string();
    validate_required_text(&to, "to", MAX_EMAIL_LEN)?;
    validate_required_text(&subject, "subject", MAX_SUBJECT_LEN)?;
    let html = body.html.unwrap_or_default();
    validate_required_text(&html, "html", MAX_HTML_LEN)?;

    Ok(EmailMessage {
        to,
        from: present(&body.from).unwrap_or(default_sender).to_string(),
        subject,
        html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_uses_default_sender() {
        let msg = validate_message(
            SendEmailRequest {
                to: Some("a@acme.com".into()),
                subject: Some("Hi".into()),
                html: Some("<p>Hello</p>".into()),
                from: Some("  ".into()),
            },
            "events@college.edu",
        )
        .unwrap();
        assert_eq!(msg.from, "events@college.edu");
        assert_eq!(msg.to, "a@acme.com");
    }

    #[test]
    fn test_message_requires_recipient() {
        let err = validate_message(
            SendEmailRequest {
                subject: Some("Hi".into()),
                html: Some("<p>Hello</p>".into()),
                ..Default::default()
            },
            "events@college.edu",
        )
        .unwrap_err();
        assert_eq!(err.message, "to is required");
    }
}

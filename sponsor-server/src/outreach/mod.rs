//! Outreach Dispatcher
//!
//! Sends a template to every sponsor still "Not Contacted", one recipient
//! at a time, and advances each successful recipient to "Contacted".
//! A failed send is recorded and the run continues; nothing is retried.
//! The store lock is never held while a send is in flight.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{OutreachFailure, OutreachResult, SponsorStatus};

use crate::email::{EmailMessage, EmailSender};
use crate::store::{RecordStore, StoreError};

/// Placeholder replaced with the sponsor's name
pub const NAME_TOKEN: &str = "{{name}}";

/// Substitute `{{name}}`; other placeholders are left as written
pub fn render_body(html: &str, name: &str) -> String {
    html.replace(NAME_TOKEN, name)
}

pub async fn send_to_uncontacted(
    store: &RecordStore,
    sender: &dyn EmailSender,
    template_id: &str,
    from: &str,
) -> AppResult<OutreachResult> {
    let template = store
        .template(template_id)
        .ok_or_else(|| AppError::new(ErrorCode::TemplateNotFound).with_detail("id", template_id))?;

    let recipients = store.sponsors_with_status(SponsorStatus::NotContacted);
    let total = recipients.len();
    tracing::info!(
        template = %template.name,
        recipients = total,
        sender = sender.name(),
        "Starting outreach"
    );

    let mut emails_sent = 0;
    let mut errors = Vec::new();

    for sponsor in recipients {
        let message = EmailMessage {
            to: sponsor.email.clone(),
            from: from.to_string(),
            subject: template.subject.clone(),
            html: render_body(&template.html, &sponsor.name),
        };

        match sender.send(&message).await {
            Ok(()) => {
                emails_sent += 1;
                match store.mark_contacted(&sponsor.id).await {
                    Ok(_) => {}
                    // Deleted while the send was in flight
                    Err(StoreError::NotFound { .. }) => {
                        tracing::warn!(sponsor_id = %sponsor.id, "Contacted sponsor no longer exists");
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Err(e) => {
                tracing::warn!(to = %sponsor.email, error = %e, "Outreach email failed");
                errors.push(OutreachFailure {
                    sponsor: sponsor.email,
                    sponsor_id: sponsor.id,
                    error: e.to_string(),
                });
            }
        }
    }

    if emails_sent > 0 {
        store
            .record_activity(format!("Outreach email sent to {emails_sent} sponsors"))
            .await?;
    }

    tracing::info!(emails_sent, failed = errors.len(), "Outreach finished");

    Ok(OutreachResult {
        emails_sent,
        total_sponsors: total,
        errors,
    })
}

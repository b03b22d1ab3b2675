use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use super::{EmailError, EmailMessage, EmailSender};

/// SendGrid v3 `mail/send` client
#[derive(Debug, Clone)]
pub struct SendGridSender {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl SendGridSender {
    pub fn new(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, EmailError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            api_url: api_url.into(),
        })
    }

    fn payload(message: &EmailMessage) -> serde_json::Value {
        json!({
            "personalizations": [{ "to": [{ "email": message.to }] }],
            "from": { "email": message.from },
            "subject": message.subject,
            "content": [{ "type": "text/html", "value": message.html }],
        })
    }
}

#[async_trait]
impl EmailSender for SendGridSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&Self::payload(message))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(to = %message.to, subject = %message.subject, "Email sent");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(EmailError::from_status(status.as_u16(), body))
    }

    fn name(&self) -> &'static str {
        "sendgrid"
    }
}

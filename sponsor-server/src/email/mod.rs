//! Outbound email
//!
//! The rest of the server only sees [`EmailSender`]: `send(message)` either
//! succeeds or fails with an [`EmailError`]. Two implementations exist:
//! [`SendGridSender`] talks to the SendGrid v3 API, [`SimulatedSender`]
//! only logs (used when no API key is configured).

mod sendgrid;
mod simulated;

pub use sendgrid::SendGridSender;
pub use simulated::SimulatedSender;

use async_trait::async_trait;
use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// A single outbound message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Error)]
pub enum EmailError {
    /// Provider answered 403
    #[error("Sender email not verified")]
    SenderNotVerified { body: String },

    /// Provider answered 401
    #[error("Invalid API key")]
    InvalidApiKey { body: String },

    #[error("Email provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Email transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl EmailError {
    /// Classify a non-success provider response
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            403 => EmailError::SenderNotVerified { body },
            401 => EmailError::InvalidApiKey { body },
            _ => EmailError::Provider { status, body },
        }
    }
}

impl From<EmailError> for AppError {
    fn from(err: EmailError) -> Self {
        tracing::error!(error = %err, "Email send failed");
        match err {
            EmailError::SenderNotVerified { .. } => AppError::new(ErrorCode::EmailSenderNotVerified),
            EmailError::InvalidApiKey { .. } => AppError::new(ErrorCode::EmailInvalidApiKey),
            EmailError::Provider { status, .. } => {
                AppError::new(ErrorCode::EmailSendFailed).with_detail("providerStatus", status)
            }
            EmailError::Transport(_) => AppError::new(ErrorCode::EmailSendFailed),
        }
    }
}

/// Email-sending capability
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

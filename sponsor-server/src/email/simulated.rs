use async_trait::async_trait;

use super::{EmailError, EmailMessage, EmailSender};

/// Logs the message instead of sending it
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSender;

#[async_trait]
impl EmailSender for SimulatedSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        tracing::info!(
            to = %message.to,
            from = %message.from,
            subject = %message.subject,
            "Simulated email send"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

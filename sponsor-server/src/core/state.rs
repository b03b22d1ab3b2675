use std::sync::Arc;
use std::time::Duration;

use crate::core::{Config, Result, ServerError};
use crate::email::{EmailSender, SendGridSender, SimulatedSender};
use crate::store::{RecordStore, catalog};

/// Shared server state
///
/// Cheap to clone; every field is behind an `Arc`. Handlers receive it via
/// axum `State`.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | Immutable configuration |
/// | store | Sponsors, deliverables, settings and the catalog |
/// | email | Outbound email capability (SendGrid or simulated) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: Arc<RecordStore>,
    pub email: Arc<dyn EmailSender>,
}

impl ServerState {
    /// Assemble state from already-built parts
    pub fn new(config: Config, store: RecordStore, email: Arc<dyn EmailSender>) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            email,
        }
    }

    /// Build state from configuration
    ///
    /// 1. Open the store (file-backed when `DATA_FILE` is set)
    /// 2. Pick the email sender (SendGrid when `SENDGRID_API_KEY` is set)
    pub async fn initialize(config: &Config) -> Result<Self> {
        let catalog = if config.seed_catalog {
            catalog::default_catalog()
        } else {
            Vec::new()
        };

        let store = match &config.data_file {
            Some(path) => RecordStore::open(path, catalog).await?,
            None => RecordStore::in_memory(catalog),
        };

        let email: Arc<dyn EmailSender> = match &config.sendgrid_api_key {
            Some(key) => {
                tracing::info!("SendGrid API key configured, outreach emails will be delivered");
                Arc::new(
                    SendGridSender::new(
                        key.clone(),
                        config.sendgrid_api_url.clone(),
                        Duration::from_millis(config.request_timeout_ms),
                    )
                    .map_err(|e| ServerError::Config(e.to_string()))?,
                )
            }
            None => {
                tracing::warn!("SENDGRID_API_KEY not set, email sends will be simulated");
                Arc::new(SimulatedSender)
            }
        };

        Ok(Self::new(config.clone(), store, email))
    }

    /// Sender address for outreach when the request has none
    pub fn default_sender(&self) -> &str {
        &self.config.default_sender
    }
}

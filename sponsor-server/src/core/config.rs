use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | DATA_FILE | (unset) | JSON data file; unset keeps everything in memory |
/// | SENDGRID_API_KEY | (unset) | Email provider key; unset simulates sends |
/// | SENDGRID_API_URL | https://api.sendgrid.com/v3/mail/send | Provider endpoint |
/// | DEFAULT_SENDER_EMAIL | samplecollege@sponzaar.com | Sender when a request has none |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Fallback level when RUST_LOG is unset |
/// | LOG_DIR | (unset) | Daily rolling log files |
/// | REQUEST_TIMEOUT_MS | 30000 | Email provider request timeout |
/// | SEED_CATALOG | true | Load the built-in marketplace catalog |
///
/// # Example
///
/// ```ignore
/// DATA_FILE=./db.json HTTP_PORT=8080 cargo run -p sponsor-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// File-backed mode when set
    pub data_file: Option<PathBuf>,
    pub sendgrid_api_key: Option<String>,
    pub sendgrid_api_url: String,
    pub default_sender: String,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub request_timeout_ms: u64,
    pub seed_catalog: bool,
}

pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";
pub const DEFAULT_SENDER_EMAIL: &str = "samplecollege@sponzaar.com";

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            data_file: non_empty_var("DATA_FILE").map(PathBuf::from),
            sendgrid_api_key: non_empty_var("SENDGRID_API_KEY"),
            sendgrid_api_url: non_empty_var("SENDGRID_API_URL")
                .unwrap_or_else(|| DEFAULT_SENDGRID_API_URL.into()),
            default_sender: non_empty_var("DEFAULT_SENDER_EMAIL")
                .unwrap_or_else(|| DEFAULT_SENDER_EMAIL.into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: non_empty_var("LOG_DIR"),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            seed_catalog: std::env::var("SEED_CATALOG")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// Override the port and storage location
    ///
    /// Used by tests
    pub fn with_overrides(http_port: u16, data_file: Option<PathBuf>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.data_file = data_file;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Whether outreach goes through the real email provider
    pub fn email_configured(&self) -> bool {
        self.sendgrid_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

//! Sponsor Server - sponsorship pipeline backend for college events
//!
//! # Overview
//!
//! A single-process HTTP/JSON API over one in-memory record store:
//!
//! - **Store** (`store`): sponsors, deliverables, templates, tiers, activity
//!   and purchased lists, optionally persisted to one JSON file
//! - **Outreach** (`outreach`): templated bulk email to uncontacted sponsors
//! - **Email** (`email`): SendGrid delivery, or simulated sends without a key
//! - **HTTP API** (`api`): RESTful routes under `/api`
//!
//! # Layout
//!
//! ```text
//! sponsor-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── api/           # routes and handlers, one module per resource
//! ├── store/         # record store, persistence, aggregates, catalog
//! ├── email/         # EmailSender trait and implementations
//! ├── outreach/      # bulk send
//! ├── middleware/    # request logging
//! └── utils/         # logger, validation
//! ```

pub mod api;
pub mod core;
pub mod email;
pub mod middleware;
pub mod outreach;
pub mod store;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use email::{EmailMessage, EmailSender};
pub use store::RecordStore;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ErrorBody, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and install the logger
pub fn setup_environment() -> Config {
    if let Err(e) = dotenv::dotenv() {
        // Missing .env is normal outside development
        eprintln!("No .env loaded: {e}");
    }

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
   _____                                
  / ___/____  ____  ____  _________  _____
  \__ \/ __ \/ __ \/ __ \/ ___/ __ \/ ___/
 ___/ / /_/ / /_/ / / / (__  ) /_/ / /    
/____/ .___/\____/_/ /_/____/\____/_/     
    /_/                                   
    "#
    );
}

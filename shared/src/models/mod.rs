//! Data models
//!
//! Shared between sponsor-server and sponsor-client (via API).
//! Wire format is camelCase JSON. Create/update payloads keep their
//! fields optional so presence checks happen at the handler boundary.

pub mod activity;
pub mod deliverable;
pub mod marketplace;
pub mod outreach;
pub mod settings;
pub mod sponsor;
pub mod stats;
pub mod template;
pub mod tier;

// Re-exports
pub use activity::*;
pub use deliverable::*;
pub use marketplace::*;
pub use outreach::*;
pub use settings::*;
pub use sponsor::*;
pub use stats::*;
pub use template::*;
pub use tier::*;

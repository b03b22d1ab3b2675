//! Marketplace API module
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/marketplace | GET | Catalog of contact lists |
//! | /api/marketplace/{id}/purchase | POST | Add a list to the library |
//! | /api/lists | GET | Purchased lists |
//! | /api/lists/import | POST | Copy contacts into the sponsors |
//! | /api/lists/import/csv | POST | Same, from a CSV body |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/marketplace", catalog_routes())
        .nest("/api/lists", library_routes())
}

fn catalog_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::catalog))
        .route("/{id}/purchase", post(handler::purchase))
}

fn library_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::purchased))
        .route("/import", post(handler::import))
        .route("/import/csv", post(handler::import_csv))
}

//! HTTP application wiring (Axum router + shared state).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and the response envelope
//! - `errors.rs`: domain-error → HTTP response mapping

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tokio::sync::Mutex;

use stockbook_inventory::Inventory;

pub mod dto;
pub mod errors;
pub mod routes;

/// The single process-wide ledger. Every operation, read or write, runs
/// under this lock so find-then-mutate sequences stay atomic.
pub type SharedInventory = Arc<Mutex<Inventory>>;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app() -> Router {
    let inventory: SharedInventory = Arc::new(Mutex::new(Inventory::new()));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(inventory))
}

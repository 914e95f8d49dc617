//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness probe (public)
//! - `/tickets` → ticket CRUD and nested `/tickets/{ticket_id}/comments`

use axum::Router;
use util::state::AppState;

pub mod health;
pub mod tickets;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router has `AppState` as its state type; `main` (and the test
/// harness) nest it under `/api` and supply the state.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/health", health::health_routes())
        .nest("/tickets", tickets::tickets_routes())
}

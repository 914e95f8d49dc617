//! Ticket routes.
//!
//! CRUD over `/tickets` plus the nested comment endpoints under
//! `/tickets/{ticket_id}/comments`.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod comments;
pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use self::delete::delete_ticket;
use self::get::{get_ticket, list_tickets};
use self::post::create_ticket;
use self::put::update_ticket;

pub fn tickets_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tickets).post(create_ticket))
        .route(
            "/{ticket_id}",
            get(get_ticket).put(update_ticket).delete(delete_ticket),
        )
        .nest("/{ticket_id}/comments", comments::comments_routes())
}

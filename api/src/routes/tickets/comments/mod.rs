//! Comment routes, nested under `/tickets/{ticket_id}/comments`.
//!
//! Comments are immutable: they can be listed and created, never updated or
//! deleted individually. They disappear only when their ticket is deleted.

use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use self::get::list_comments;
use self::post::create_comment;

pub fn comments_routes() -> Router<AppState> {
    Router::new().route("/", get(list_comments).post(create_comment))
}

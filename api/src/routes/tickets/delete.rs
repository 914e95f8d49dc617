//! Ticket deletion handler.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::ticket::Model as TicketModel;
use util::state::AppState;

use crate::response::{internal_error, not_found};

/// DELETE /api/tickets/{ticket_id}
///
/// Removes the ticket and all of its comments (cascade) in one transaction.
///
/// ### Responses
/// - `204 No Content` on success.
/// - `404 Not Found` if no ticket has the given id.
/// - `500 Internal Server Error` on database failure.
pub async fn delete_ticket(
    State(app_state): State<AppState>,
    Path(ticket_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match TicketModel::delete(db, ticket_id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => not_found("Ticket not found"),
        Err(err) => internal_error(err),
    }
}

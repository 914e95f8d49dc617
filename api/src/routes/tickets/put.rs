//! Ticket update handler.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use db::models::ticket::Model as TicketModel;
use util::state::AppState;
use validator::Validate;

use crate::response::{internal_error, not_found, validation_failed};
use crate::routes::tickets::common::UpdateTicketRequest;

/// PUT /api/tickets/{ticket_id}
///
/// Partially updates a ticket: only the fields present in the request change,
/// and `updatedAt` is refreshed. Validation runs before the existence check,
/// so an invalid payload yields 400 even for an unknown id.
///
/// There is no concurrency token; concurrent updates to the same ticket are
/// last-write-wins.
///
/// ### Request Body
/// ```json
/// { "status": 3 }
/// ```
///
/// ### Responses
/// - `204 No Content` on success.
/// - `400 Bad Request` with a field error list on validation failure.
/// - `404 Not Found` if no ticket has the given id.
/// - `500 Internal Server Error` on database failure.
pub async fn update_ticket(
    State(app_state): State<AppState>,
    Path(ticket_id): Path<i64>,
    Json(req): Json<UpdateTicketRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }

    let db = app_state.db();

    match TicketModel::update(db, ticket_id, req.changes()).await {
        Ok(Some(_)) => StatusCode::NO_CONTENT.into_response(),
        Ok(None) => not_found("Ticket not found"),
        Err(err) => internal_error(err),
    }
}

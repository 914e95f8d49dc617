//! Ticket creation handler.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Json},
};
use db::models::ticket::Model as TicketModel;
use util::state::AppState;
use validator::Validate;

use crate::response::{internal_error, validation_failed};
use crate::routes::tickets::common::{CreateTicketRequest, TicketResponse};

/// POST /api/tickets
///
/// Creates a new support ticket. New tickets always start in status Open;
/// priority defaults to Medium when omitted.
///
/// ### Request Body
/// ```json
/// { "title": "Printer broken", "description": "It jams on page 2", "priority": 3 }
/// ```
///
/// ### Responses
/// - `201 Created` with the ticket representation and a `Location` header
///   pointing at `/api/tickets/{id}`.
/// - `400 Bad Request` with a field error list on validation failure.
/// - `500 Internal Server Error` on database failure.
pub async fn create_ticket(
    State(app_state): State<AppState>,
    Json(req): Json<CreateTicketRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }

    let db = app_state.db();

    match TicketModel::create(db, &req.title, &req.description, req.priority()).await {
        Ok(ticket) => {
            let location = format!("/api/tickets/{}", ticket.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(TicketResponse::from(ticket)),
            )
                .into_response()
        }
        Err(err) => internal_error(err),
    }
}

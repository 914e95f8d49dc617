//! Comment listing handler.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use db::models::comment::Model as CommentModel;
use db::models::ticket::Model as TicketModel;
use util::state::AppState;

use crate::response::{internal_error, not_found};
use crate::routes::tickets::comments::common::CommentResponse;

/// GET /api/tickets/{ticket_id}/comments
///
/// Lists all comments on the ticket, oldest first (ticket listing is
/// newest-first; comment threads read top-down).
///
/// ### Responses
/// - `200 OK` with an array of comment representations.
/// - `404 Not Found` if the ticket does not exist — distinct from an existing
///   ticket with no comments, which yields an empty array.
/// - `500 Internal Server Error` on database failure.
pub async fn list_comments(
    State(app_state): State<AppState>,
    Path(ticket_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match TicketModel::exists(db, ticket_id).await {
        Ok(true) => {}
        Ok(false) => return not_found("Ticket not found"),
        Err(err) => return internal_error(err),
    }

    match CommentModel::find_all_for_ticket(db, ticket_id).await {
        Ok(comments) => {
            let body: Vec<CommentResponse> =
                comments.into_iter().map(CommentResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => internal_error(err),
    }
}

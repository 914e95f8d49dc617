//! Comment creation handler.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json},
};
use db::models::comment::Model as CommentModel;
use db::models::ticket::Model as TicketModel;
use util::state::AppState;
use validator::Validate;

use crate::response::{internal_error, not_found, validation_failed};
use crate::routes::tickets::comments::common::{CommentResponse, CreateCommentRequest};

/// POST /api/tickets/{ticket_id}/comments
///
/// Adds a comment to an existing ticket. Validation runs before the
/// existence check; nothing is persisted unless the ticket exists and the
/// content passes its rules.
///
/// ### Request Body
/// ```json
/// { "content": "Looking into it" }
/// ```
///
/// ### Responses
/// - `201 Created` with the comment representation and a `Location` header
///   pointing at the ticket's comment list.
/// - `400 Bad Request` with a field error list on validation failure.
/// - `404 Not Found` if the ticket does not exist.
/// - `500 Internal Server Error` on database failure.
pub async fn create_comment(
    State(app_state): State<AppState>,
    Path(ticket_id): Path<i64>,
    Json(req): Json<CreateCommentRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }

    let db = app_state.db();

    match TicketModel::exists(db, ticket_id).await {
        Ok(true) => {}
        Ok(false) => return not_found("Ticket not found"),
        Err(err) => return internal_error(err),
    }

    match CommentModel::create(db, ticket_id, &req.content).await {
        Ok(comment) => {
            let location = format!("/api/tickets/{}/comments", ticket_id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(CommentResponse::from(comment)),
            )
                .into_response()
        }
        Err(err) => internal_error(err),
    }
}

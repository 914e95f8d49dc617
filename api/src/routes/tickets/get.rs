//! Ticket retrieval handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use db::models::ticket::Model as TicketModel;
use util::state::AppState;

use crate::response::{PagedResponse, internal_error, not_found};
use crate::routes::tickets::common::{ListTicketsQuery, TicketResponse};

/// GET /api/tickets
///
/// Retrieves a paginated list of tickets ordered by creation date, newest
/// first.
///
/// # Query Parameters
/// - `page`: (Optional) 1-based page number. Defaults to 1, clamped to ≥ 1.
/// - `pageSize`: (Optional) Items per page. Defaults to 10, clamped to ≥ 1.
///
/// A page past the end returns an empty `items` array, not an error.
///
/// # Returns
/// - `200 OK` with
///   `{ items, page, pageSize, totalCount, totalPages }` where
///   `totalPages = ceil(totalCount / pageSize)`.
/// - `500 INTERNAL SERVER ERROR` on database failure.
pub async fn list_tickets(
    State(app_state): State<AppState>,
    Query(params): Query<ListTicketsQuery>,
) -> impl IntoResponse {
    let db = app_state.db();

    let page = params.page.unwrap_or(1).max(1) as u64;
    let page_size = params.page_size.unwrap_or(10).max(1) as u64;

    match TicketModel::list_paginated(db, page, page_size).await {
        Ok((tickets, total_count)) => {
            let items: Vec<TicketResponse> =
                tickets.into_iter().map(TicketResponse::from).collect();

            (
                StatusCode::OK,
                Json(PagedResponse {
                    items,
                    page,
                    page_size,
                    total_count,
                    total_pages: total_count.div_ceil(page_size),
                }),
            )
                .into_response()
        }
        Err(err) => internal_error(err),
    }
}

/// GET /api/tickets/{ticket_id}
///
/// # Returns
/// - `200 OK` with the ticket representation.
/// - `404 NOT FOUND` if no ticket has the given id.
/// - `500 INTERNAL SERVER ERROR` on database failure.
pub async fn get_ticket(
    State(app_state): State<AppState>,
    Path(ticket_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match TicketModel::find_by_id(db, ticket_id).await {
        Ok(Some(ticket)) => {
            (StatusCode::OK, Json(TicketResponse::from(ticket))).into_response()
        }
        Ok(None) => not_found("Ticket not found"),
        Err(err) => internal_error(err),
    }
}

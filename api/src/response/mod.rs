//! Wire envelopes shared by every endpoint.
//!
//! Success bodies are the resource representations themselves
//! (`TicketResponse`, `CommentResponse`, `PagedResponse<T>`); failures use a
//! small problem payload:
//!
//! ```json
//! { "title": "Ticket not found", "status": 404 }
//! ```
//!
//! Validation failures carry a structured field list:
//!
//! ```json
//! {
//!   "title": "One or more validation errors occurred",
//!   "status": 400,
//!   "errors": [ { "field": "title", "message": "..." } ]
//! }
//! ```
//!
//! Unhandled failures are logged with a fresh trace id and answered with an
//! opaque 500 carrying that id only — no internal detail reaches the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;
use validator::ValidationErrors;

/// Problem payload for 404 and 500 responses.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// One field-rule violation.
#[derive(Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Problem payload for 400 validation failures.
#[derive(Serialize)]
pub struct ValidationProblem {
    pub title: String,
    pub status: u16,
    pub errors: Vec<FieldError>,
}

/// Result envelope carrying one page of items plus pagination metadata.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T: Serialize> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub total_pages: u64,
}

/// Builds a 404 response with the given message.
pub fn not_found(message: impl Into<String>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(Problem {
            title: message.into(),
            status: StatusCode::NOT_FOUND.as_u16(),
            trace_id: None,
        }),
    )
        .into_response()
}

/// Builds a 400 response from `validator` output.
///
/// Errors are sorted by field name so the body is stable regardless of
/// hash-map iteration order.
pub fn validation_failed(errors: &ValidationErrors) -> Response {
    let mut fields: Vec<FieldError> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for err in field_errors {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));
            fields.push(FieldError {
                field: field.to_string(),
                message,
            });
        }
    }
    fields.sort_by(|a, b| a.field.cmp(&b.field));

    (
        StatusCode::BAD_REQUEST,
        Json(ValidationProblem {
            title: "One or more validation errors occurred".into(),
            status: StatusCode::BAD_REQUEST.as_u16(),
            errors: fields,
        }),
    )
        .into_response()
}

/// Boundary handler for unhandled failures.
///
/// Logs the underlying error together with a fresh trace id, and returns an
/// opaque 500 whose body carries the trace id only.
pub fn internal_error<E: std::fmt::Display>(err: E) -> Response {
    let trace_id = Uuid::new_v4().to_string();
    tracing::error!(%trace_id, error = %err, "unhandled error while processing request");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Problem {
            title: "An error occurred while processing your request".into(),
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            trace_id: Some(trace_id),
        }),
    )
        .into_response()
}

//! Ticket request/response models.
//!
//! Requests carry status/priority as their integer wire values
//! (1=Open 2=InProgress 3=Resolved 4=Closed; 1=Low 2=Medium 3=High
//! 4=Critical) and are checked with `validator` before anything touches the
//! store. Missing string fields deserialize to `""` and fail the min-length
//! rule, so "absent" and "empty" are both rejected on create.

use db::models::ticket::{Model as TicketModel, TicketPriority, TicketStatus, UpdateTicket};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateTicketRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title is required and must be at most 200 characters"
    ))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 2000,
        message = "Description is required and must be at most 2000 characters"
    ))]
    pub description: String,

    #[validate(range(
        min = 1,
        max = 4,
        message = "Priority must be one of 1 (Low), 2 (Medium), 3 (High) or 4 (Critical)"
    ))]
    pub priority: Option<i32>,
}

impl CreateTicketRequest {
    /// Requested priority, defaulting to Medium when omitted. Call only after
    /// validation: a present value is then guaranteed to be a defined variant.
    pub fn priority(&self) -> TicketPriority {
        self.priority
            .and_then(TicketPriority::from_wire)
            .unwrap_or(TicketPriority::Medium)
    }
}

/// Partial update: every field optional, absent fields leave the stored value
/// unchanged. Bounds mirror creation, except that presence is not required.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateTicketRequest {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(range(
        min = 1,
        max = 4,
        message = "Status must be one of 1 (Open), 2 (InProgress), 3 (Resolved) or 4 (Closed)"
    ))]
    pub status: Option<i32>,

    #[validate(range(
        min = 1,
        max = 4,
        message = "Priority must be one of 1 (Low), 2 (Medium), 3 (High) or 4 (Critical)"
    ))]
    pub priority: Option<i32>,
}

impl UpdateTicketRequest {
    /// Converts the validated request into the model-level change set.
    pub fn changes(&self) -> UpdateTicket {
        UpdateTicket {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status.and_then(TicketStatus::from_wire),
            priority: self.priority.and_then(TicketPriority::from_wire),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListTicketsQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: i32,
    pub priority: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TicketModel> for TicketResponse {
    fn from(ticket: TicketModel) -> Self {
        Self {
            id: ticket.id,
            title: ticket.title,
            description: ticket.description,
            status: ticket.status as i32,
            priority: ticket.priority as i32,
            created_at: ticket.created_at.to_rfc3339(),
            updated_at: ticket.updated_at.to_rfc3339(),
        }
    }
}

//! Comment request/response models.

use db::models::comment::Model as CommentModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateCommentRequest {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Content is required and must be at most 1000 characters"
    ))]
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub ticket_id: i64,
    pub content: String,
    pub created_at: String,
}

impl From<CommentModel> for CommentResponse {
    fn from(comment: CommentModel) -> Self {
        Self {
            id: comment.id,
            ticket_id: comment.ticket_id,
            content: comment.content,
            created_at: comment.created_at.to_rfc3339(),
        }
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A comment as the remote service stores it.
/// `id`, `date` and `likes` are server-assigned; the client never invents
/// them and never keeps a locally-built comment in the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub post_id: String,
    pub author: String,
    pub content: String,

    // ISO-8601 on the wire, assigned by the service at creation.
    pub date: chrono::DateTime<chrono::Utc>,

    /// Like counter, owned by the service. Only ever overwritten with the
    /// value a like request returns, never incremented locally.
    pub likes: u32,
}

/// DTO for creating a new comment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub post_id: String,

    #[validate(length(min = 1, max = 100, message = "Author name must be between 1 and 100 characters"))]
    pub author: String,

    #[validate(length(
        min = 1,
        max = 1000,
        message = "Comment must be between 1 and 1000 characters"
    ))]
    pub content: String,
}

/// Response of the like endpoint: the authoritative counter value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    pub likes: u32,
}

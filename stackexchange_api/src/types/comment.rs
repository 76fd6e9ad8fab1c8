use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ShallowUser;

/// Numeric identifier for a comment.
pub type CommentID = i64;

/// A comment on a question or an answer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub comment_id: CommentID,
    /// The question or answer the comment is attached to.
    pub post_id: i64,
    pub owner: Option<ShallowUser>,
    pub reply_to_user: Option<ShallowUser>,
    pub score: i64,
    pub edited: bool,

    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub creation_date: Option<DateTime<Utc>>,

    pub body: Option<String>,
}

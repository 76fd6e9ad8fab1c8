//! Question type returned by the `/questions` family of endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AnswerID, ShallowUser};

/// Numeric identifier for a question.
pub type QuestionID = i64;

/// A question, with the fields of the API's default filter.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    pub question_id: QuestionID,
    pub title: String,
    pub tags: Vec<String>,
    pub owner: Option<ShallowUser>,
    pub is_answered: bool,
    pub view_count: i64,
    pub answer_count: i64,
    pub score: i64,
    pub accepted_answer_id: Option<AnswerID>,

    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub last_activity_date: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub last_edit_date: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub closed_date: Option<DateTime<Utc>>,

    pub link: String,
    /// Only present when the filter includes it.
    pub body: Option<String>,
}

impl Question {
    /// Whether the asker accepted one of the answers.
    pub fn has_accepted_answer(&self) -> bool {
        self.accepted_answer_id.is_some()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{QuestionID, ShallowUser};

/// Numeric identifier for an answer.
pub type AnswerID = i64;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Answer {
    pub answer_id: AnswerID,
    pub question_id: QuestionID,
    pub owner: Option<ShallowUser>,
    pub is_accepted: bool,
    pub score: i64,

    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub last_activity_date: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub last_edit_date: Option<DateTime<Utc>>,

    pub body: Option<String>,
}

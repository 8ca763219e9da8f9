use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An answer always belongs to exactly one question; `question_id` is set on
/// insert and never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Answer state handed to the store. A missing `id` means insert; on update
/// only `text` is written.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerDraft {
    pub id: Option<i64>,
    pub question_id: i64,
    pub text: String,
}

impl AnswerDraft {
    pub fn new(question_id: i64, text: impl Into<String>) -> Self {
        Self {
            id: None,
            question_id,
            text: text.into(),
        }
    }
}

impl From<Answer> for AnswerDraft {
    fn from(answer: Answer) -> Self {
        Self {
            id: Some(answer.id),
            question_id: answer.question_id,
            text: answer.text,
        }
    }
}

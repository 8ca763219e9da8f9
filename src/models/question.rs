use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Question state handed to the store. A missing `id` means insert.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDraft {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
}

impl From<Question> for QuestionDraft {
    fn from(question: Question) -> Self {
        Self {
            id: Some(question.id),
            title: question.title,
            description: question.description,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::answer::Answer;

pub const MAX_ANSWER_TEXT: u64 = 10_000;

/// Body of POST and PUT on answers. Only `text` is read; `id`, `question` and
/// timestamps sent by clients are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnswerPayload {
    #[validate(required(message = "text must not be null"), length(min = 1, max = MAX_ANSWER_TEXT))]
    pub text: Option<String>,
}

impl AnswerPayload {
    /// Text of a payload that already passed `validate()`.
    pub fn into_text(self) -> String {
        self.text.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub id: i64,
    pub text: String,
    pub question_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.id,
            text: answer.text,
            question_id: answer.question_id,
            created_at: answer.created_at,
            updated_at: answer.updated_at,
        }
    }
}

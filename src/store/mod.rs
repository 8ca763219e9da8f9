use async_trait::async_trait;

use crate::error::Result;
use crate::models::answer::{Answer, AnswerDraft};
use crate::models::question::{Question, QuestionDraft};

mod memory;
mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgStore;

/// Persistence port for questions and their answers.
///
/// Implementations must be safe to call concurrently. `save_*` inserts when
/// the draft carries no id and updates otherwise; both paths maintain the
/// audit timestamps (`updated_at` is strictly increasing per row).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    async fn question_exists(&self, question_id: i64) -> Result<bool>;
    async fn find_question(&self, question_id: i64) -> Result<Option<Question>>;
    async fn find_all_questions(&self) -> Result<Vec<Question>>;
    async fn save_question(&self, question: QuestionDraft) -> Result<Question>;
    /// Removes the question together with its answers.
    async fn delete_question(&self, question: &Question) -> Result<()>;

    /// Ordered by id; empty when the question is missing or has no answers.
    async fn find_answers_by_question(&self, question_id: i64) -> Result<Vec<Answer>>;
    async fn find_answer(&self, answer_id: i64) -> Result<Option<Answer>>;
    async fn save_answer(&self, answer: AnswerDraft) -> Result<Answer>;
    async fn delete_answer(&self, answer: &Answer) -> Result<()>;
}

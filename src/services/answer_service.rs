use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::answer::{Answer, AnswerDraft};
use crate::store::Store;

/// Answers only exist under a question: every operation that is handed a
/// question id checks the parent before touching the child.
#[derive(Clone)]
pub struct AnswerService {
    store: Arc<dyn Store>,
}

impl AnswerService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// No parent check: an unknown question simply has no answers.
    pub async fn list_by_question(&self, question_id: i64) -> Result<Vec<Answer>> {
        self.store.find_answers_by_question(question_id).await
    }

    pub async fn create(&self, question_id: i64, text: String) -> Result<Answer> {
        let Some(question) = self.store.find_question(question_id).await? else {
            debug!(question_id, "create answer: question missing");
            return Err(Error::question_not_found(question_id));
        };

        let answer = self
            .store
            .save_answer(AnswerDraft::new(question.id, text))
            .await?;
        info!(question_id, answer_id = answer.id, "answer created");
        Ok(answer)
    }

    // Ownership of the answer by `question_id` is not checked.
    pub async fn update(&self, question_id: i64, answer_id: i64, text: String) -> Result<Answer> {
        let answer = self.existing_answer(question_id, answer_id).await?;

        let mut draft = AnswerDraft::from(answer);
        draft.text = text;
        let updated = self.store.save_answer(draft).await?;
        info!(question_id, answer_id, "answer updated");
        Ok(updated)
    }

    pub async fn delete(&self, question_id: i64, answer_id: i64) -> Result<()> {
        let answer = self.existing_answer(question_id, answer_id).await?;

        self.store.delete_answer(&answer).await?;
        info!(question_id, answer_id, "answer deleted");
        Ok(())
    }

    async fn existing_answer(&self, question_id: i64, answer_id: i64) -> Result<Answer> {
        if !self.store.question_exists(question_id).await? {
            debug!(question_id, answer_id, "question missing");
            return Err(Error::question_not_found(question_id));
        }

        self.store.find_answer(answer_id).await?.ok_or_else(|| {
            debug!(question_id, answer_id, "answer missing");
            Error::answer_not_found(answer_id)
        })
    }
}

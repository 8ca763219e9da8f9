use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::question::{Question, QuestionDraft};
use crate::store::Store;

#[derive(Clone)]
pub struct QuestionService {
    store: Arc<dyn Store>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Question>> {
        self.store.find_all_questions().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Question> {
        self.store.find_question(id).await?.ok_or_else(|| {
            debug!(question_id = id, "question missing");
            Error::question_not_found(id)
        })
    }

    pub async fn create(&self, title: String, description: Option<String>) -> Result<Question> {
        let question = self
            .store
            .save_question(QuestionDraft {
                id: None,
                title,
                description,
            })
            .await?;
        info!(question_id = question.id, "question created");
        Ok(question)
    }

    pub async fn update(
        &self,
        id: i64,
        title: String,
        description: Option<String>,
    ) -> Result<Question> {
        let mut draft = QuestionDraft::from(self.get_by_id(id).await?);
        draft.title = title;
        draft.description = description;
        let question = self.store.save_question(draft).await?;
        info!(question_id = id, "question updated");
        Ok(question)
    }

    /// Deletes the question and, with it, all of its answers.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let question = self.get_by_id(id).await?;
        self.store.delete_question(&question).await?;
        info!(question_id = id, "question deleted");
        Ok(())
    }
}

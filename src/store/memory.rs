use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::error::{Error, Result};
use crate::models::answer::{Answer, AnswerDraft};
use crate::models::question::{Question, QuestionDraft};
use crate::store::Store;
use crate::utils::time::now;

#[derive(Debug, Default)]
struct Tables {
    questions: BTreeMap<i64, Question>,
    answers: BTreeMap<i64, Answer>,
    last_question_id: i64,
    last_answer_id: i64,
}

/// Process-local store. Ids come from per-table counters and are never reused.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| Error::Internal("in-memory store lock poisoned".to_string()))
    }
}

fn touched(previous: DateTime<Utc>) -> DateTime<Utc> {
    now().max(previous + Duration::microseconds(1))
}

#[async_trait]
impl Store for InMemoryStore {
    async fn question_exists(&self, question_id: i64) -> Result<bool> {
        Ok(self.lock()?.questions.contains_key(&question_id))
    }

    async fn find_question(&self, question_id: i64) -> Result<Option<Question>> {
        Ok(self.lock()?.questions.get(&question_id).cloned())
    }

    async fn find_all_questions(&self) -> Result<Vec<Question>> {
        Ok(self.lock()?.questions.values().cloned().collect())
    }

    async fn save_question(&self, question: QuestionDraft) -> Result<Question> {
        let mut tables = self.lock()?;
        match question.id {
            None => {
                tables.last_question_id += 1;
                let id = tables.last_question_id;
                let created_at = now();
                let saved = Question {
                    id,
                    title: question.title,
                    description: question.description,
                    created_at,
                    updated_at: created_at,
                };
                tables.questions.insert(id, saved.clone());
                Ok(saved)
            }
            Some(id) => {
                let existing = tables
                    .questions
                    .get_mut(&id)
                    .ok_or_else(|| Error::question_not_found(id))?;
                existing.title = question.title;
                existing.description = question.description;
                existing.updated_at = touched(existing.updated_at);
                Ok(existing.clone())
            }
        }
    }

    async fn delete_question(&self, question: &Question) -> Result<()> {
        let mut tables = self.lock()?;
        tables.questions.remove(&question.id);
        tables
            .answers
            .retain(|_, answer| answer.question_id != question.id);
        Ok(())
    }

    async fn find_answers_by_question(&self, question_id: i64) -> Result<Vec<Answer>> {
        Ok(self
            .lock()?
            .answers
            .values()
            .filter(|answer| answer.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn find_answer(&self, answer_id: i64) -> Result<Option<Answer>> {
        Ok(self.lock()?.answers.get(&answer_id).cloned())
    }

    async fn save_answer(&self, answer: AnswerDraft) -> Result<Answer> {
        let mut tables = self.lock()?;
        match answer.id {
            None => {
                if !tables.questions.contains_key(&answer.question_id) {
                    return Err(Error::question_not_found(answer.question_id));
                }
                tables.last_answer_id += 1;
                let id = tables.last_answer_id;
                let created_at = now();
                let saved = Answer {
                    id,
                    question_id: answer.question_id,
                    text: answer.text,
                    created_at,
                    updated_at: created_at,
                };
                tables.answers.insert(id, saved.clone());
                Ok(saved)
            }
            Some(id) => {
                let existing = tables
                    .answers
                    .get_mut(&id)
                    .ok_or_else(|| Error::answer_not_found(id))?;
                existing.text = answer.text;
                existing.updated_at = touched(existing.updated_at);
                Ok(existing.clone())
            }
        }
    }

    async fn delete_answer(&self, answer: &Answer) -> Result<()> {
        self.lock()?.answers.remove(&answer.id);
        Ok(())
    }
}

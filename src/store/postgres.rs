use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{Error, Result};
use crate::models::answer::{Answer, AnswerDraft};
use crate::models::question::{Question, QuestionDraft};
use crate::store::Store;

const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == FOREIGN_KEY_VIOLATION)
        .unwrap_or(false)
}

#[async_trait]
impl Store for PgStore {
    async fn question_exists(&self, question_id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM questions WHERE id = $1)",
        )
        .bind(question_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn find_question(&self, question_id: i64) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, title, description, created_at, updated_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(question)
    }

    async fn find_all_questions(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, title, description, created_at, updated_at
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn save_question(&self, question: QuestionDraft) -> Result<Question> {
        match question.id {
            None => {
                let saved = sqlx::query_as::<_, Question>(
                    r#"
                    INSERT INTO questions (title, description)
                    VALUES ($1, $2)
                    RETURNING id, title, description, created_at, updated_at
                    "#,
                )
                .bind(&question.title)
                .bind(&question.description)
                .fetch_one(&self.pool)
                .await?;
                Ok(saved)
            }
            Some(id) => sqlx::query_as::<_, Question>(
                r#"
                UPDATE questions
                SET
                    title = $2,
                    description = $3,
                    updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
                WHERE id = $1
                RETURNING id, title, description, created_at, updated_at
                "#,
            )
            .bind(id)
            .bind(&question.title)
            .bind(&question.description)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::question_not_found(id)),
        }
    }

    async fn delete_question(&self, question: &Question) -> Result<()> {
        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(question.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_answers_by_question(&self, question_id: i64) -> Result<Vec<Answer>> {
        let answers = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, question_id, text, created_at, updated_at
            FROM answers
            WHERE question_id = $1
            ORDER BY id
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(answers)
    }

    async fn find_answer(&self, answer_id: i64) -> Result<Option<Answer>> {
        let answer = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, question_id, text, created_at, updated_at
            FROM answers
            WHERE id = $1
            "#,
        )
        .bind(answer_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(answer)
    }

    async fn save_answer(&self, answer: AnswerDraft) -> Result<Answer> {
        match answer.id {
            None => sqlx::query_as::<_, Answer>(
                r#"
                INSERT INTO answers (question_id, text)
                VALUES ($1, $2)
                RETURNING id, question_id, text, created_at, updated_at
                "#,
            )
            .bind(answer.question_id)
            .bind(&answer.text)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                // parent removed between the existence check and the insert
                if is_foreign_key_violation(&err) {
                    Error::question_not_found(answer.question_id)
                } else {
                    Error::Database(err)
                }
            }),
            Some(id) => sqlx::query_as::<_, Answer>(
                r#"
                UPDATE answers
                SET
                    text = $2,
                    updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
                WHERE id = $1
                RETURNING id, question_id, text, created_at, updated_at
                "#,
            )
            .bind(id)
            .bind(&answer.text)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::answer_not_found(id)),
        }
    }

    async fn delete_answer(&self, answer: &Answer) -> Result<()> {
        sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(answer.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

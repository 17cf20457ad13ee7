use color_eyre::Result;
use sqlx::types::Json;

use super::models::QuestionModel;
use super::Db;
use crate::models::{Answer, QuestionType};

pub struct NewQuestion<'a> {
    pub quiz_id: i64,
    pub question_text: &'a str,
    pub question_type: QuestionType,
    pub question_order: i64,
    pub answers: &'a [Answer],
}

impl Db {
    /// Returns the id of the new question.
    pub async fn create_question(&self, question: NewQuestion<'_>) -> Result<i64> {
        let question_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (quiz_id, question_text, question_type, question_order, answers, is_active)
            VALUES (?, ?, ?, ?, ?, 1)
            RETURNING id
            "#,
        )
        .bind(question.quiz_id)
        .bind(question.question_text)
        .bind(question.question_type)
        .bind(question.question_order)
        .bind(Json(question.answers))
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            "new question created with id: {question_id} for quiz_id: {} at order {}",
            question.quiz_id,
            question.question_order
        );
        Ok(question_id)
    }

    /// Exact match on `question_order`. Duplicate rows resolve to the oldest.
    pub async fn question_by_order(&self, quiz_id: i64, order: i64) -> Result<Option<QuestionModel>> {
        let question = sqlx::query_as::<_, QuestionModel>(
            r#"
            SELECT id, quiz_id, question_text, question_type, question_order, answers, is_active
            FROM questions
            WHERE quiz_id = ? AND question_order = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(quiz_id)
        .bind(order)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    pub async fn question_order_taken(&self, quiz_id: i64, order: i64) -> Result<bool> {
        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM questions WHERE quiz_id = ? AND question_order = ?)",
        )
        .bind(quiz_id)
        .bind(order)
        .fetch_one(&self.pool)
        .await?;

        Ok(taken)
    }

    /// Counts active and inactive questions alike.
    pub async fn questions_count(&self, quiz_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE quiz_id = ?")
            .bind(quiz_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn questions(&self, quiz_id: i64) -> Result<Vec<QuestionModel>> {
        let questions = sqlx::query_as::<_, QuestionModel>(
            r#"
            SELECT id, quiz_id, question_text, question_type, question_order, answers, is_active
            FROM questions
            WHERE quiz_id = ?
            ORDER BY question_order, id
            "#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }
}

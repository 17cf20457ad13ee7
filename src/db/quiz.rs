use color_eyre::Result;

use super::models::{Quiz, QuizOverview};
use super::Db;

pub struct NewQuiz<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub is_active: bool,
}

pub struct QuizUpdate<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub is_active: bool,
}

impl Db {
    /// Returns the id of the new quiz.
    pub async fn create_quiz(&self, quiz: NewQuiz<'_>) -> Result<i64> {
        let quiz_id: i64 = sqlx::query_scalar(
            "INSERT INTO quizzes (name, slug, description, is_active, created_at) VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(quiz.name)
        .bind(quiz.slug)
        .bind(quiz.description)
        .bind(quiz.is_active)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("new quiz created with id: {quiz_id}, slug: {}", quiz.slug);
        Ok(quiz_id)
    }

    pub async fn quiz_by_slug(&self, slug: &str) -> Result<Option<Quiz>> {
        let quiz = sqlx::query_as::<_, Quiz>(
            "SELECT id, slug, name, description, is_active, created_at FROM quizzes WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quiz)
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM quizzes WHERE slug = ?)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    /// Last write wins. Returns whether a quiz with that slug existed.
    pub async fn update_quiz(&self, slug: &str, update: QuizUpdate<'_>) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE quizzes SET name = ?, description = ?, is_active = ? WHERE slug = ?",
        )
        .bind(update.name)
        .bind(update.description)
        .bind(update.is_active)
        .bind(slug)
        .execute(&self.pool)
        .await?;

        let updated = result.rows_affected() > 0;
        if updated {
            tracing::info!("quiz updated with slug: {slug}");
        }
        Ok(updated)
    }

    /// All quizzes in creation order.
    pub async fn quizzes(&self) -> Result<Vec<Quiz>> {
        let quizzes = sqlx::query_as::<_, Quiz>(
            "SELECT id, slug, name, description, is_active, created_at FROM quizzes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(quizzes)
    }

    pub async fn quizzes_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quizzes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn quiz_overviews(&self) -> Result<Vec<QuizOverview>> {
        let overviews = sqlx::query_as::<_, QuizOverview>(
            r#"
            SELECT
                q.id,
                q.slug,
                q.name,
                q.is_active,
                (SELECT COUNT(*) FROM questions WHERE quiz_id = q.id) AS question_count,
                (SELECT COUNT(*) FROM leads WHERE quiz_id = q.id) AS lead_count
            FROM quizzes q
            ORDER BY q.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(overviews)
    }
}

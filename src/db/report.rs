use color_eyre::Result;

use super::models::QuizLeadCount;
use super::Db;

impl Db {
    /// Lead count per quiz, in quiz id order. Quizzes without leads report 0.
    pub async fn quiz_lead_counts(&self) -> Result<Vec<QuizLeadCount>> {
        let counts = sqlx::query_as::<_, QuizLeadCount>(
            r#"
            SELECT q.id, q.name, COUNT(l.id) AS lead_count
            FROM quizzes q
            LEFT JOIN leads l ON l.quiz_id = q.id
            GROUP BY q.id, q.name
            ORDER BY q.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }
}

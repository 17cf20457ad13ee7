use color_eyre::Result;

use super::models::{LeadListing, LeadModel};
use super::Db;

/// Contact details ready to store. Blank names are already `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Db {
    /// Leads are never deduplicated; every call inserts a new row.
    pub async fn create_lead(&self, quiz_id: i64, lead: &NewLead) -> Result<i64> {
        let lead_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO leads (quiz_id, email, first_name, last_name, submission_date)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(quiz_id)
        .bind(&lead.email)
        .bind(&lead.first_name)
        .bind(&lead.last_name)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("new lead captured with id: {lead_id} for quiz_id: {quiz_id}");
        Ok(lead_id)
    }

    /// Leads captured by one quiz, newest first.
    pub async fn leads_for_quiz(&self, quiz_id: i64) -> Result<Vec<LeadModel>> {
        let leads = sqlx::query_as::<_, LeadModel>(
            r#"
            SELECT id, quiz_id, email, first_name, last_name, submission_date
            FROM leads
            WHERE quiz_id = ?
            ORDER BY submission_date DESC, id DESC
            "#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(leads)
    }

    /// Every lead, newest first.
    pub async fn lead_listings(&self) -> Result<Vec<LeadListing>> {
        let leads = sqlx::query_as::<_, LeadListing>(
            r#"
            SELECT
                l.id,
                q.name AS quiz_name,
                q.slug AS quiz_slug,
                l.email,
                l.first_name,
                l.last_name,
                l.submission_date
            FROM leads l
            JOIN quizzes q ON q.id = l.quiz_id
            ORDER BY l.submission_date DESC, l.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(leads)
    }

    pub async fn leads_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leads")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

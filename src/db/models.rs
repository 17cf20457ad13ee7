// Database model structs

use chrono::{DateTime, Utc};
use sqlx::types::Json;

use crate::models::{Answer, QuestionType};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Quiz {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct QuestionModel {
    pub id: i64,
    pub quiz_id: i64,
    pub question_text: String,
    pub question_type: QuestionType,
    pub question_order: i64,
    pub answers: Json<Vec<Answer>>,
    pub is_active: bool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LeadModel {
    pub id: i64,
    pub quiz_id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub submission_date: DateTime<Utc>,
}

/// A lead joined with the name of the quiz that captured it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LeadListing {
    pub id: i64,
    pub quiz_name: String,
    pub quiz_slug: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub submission_date: DateTime<Utc>,
}

/// One dashboard row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct QuizOverview {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub is_active: bool,
    pub question_count: i64,
    pub lead_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct QuizLeadCount {
    pub id: i64,
    pub name: String,
    pub lead_count: i64,
}

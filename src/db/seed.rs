use color_eyre::Result;
use sqlx::types::Json;

use super::Db;
use crate::models::{Answer, QuestionType};

struct SeedQuiz {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
}

struct SeedQuestion {
    text: &'static str,
    order: i64,
    answers: &'static [(&'static str, &'static str)],
}

const SEED_QUIZZES: &[SeedQuiz] = &[
    SeedQuiz {
        name: "Marketing Strategy Quiz",
        slug: "marketing-strategy",
        description: "Assess your marketing maturity.",
    },
    SeedQuiz {
        name: "Product Fit Quiz",
        slug: "product-fit",
        description: "Find the right product for you.",
    },
];

const SEED_QUESTIONS: &[SeedQuestion] = &[
    SeedQuestion {
        text: "What is your primary marketing goal?",
        order: 1,
        answers: &[
            ("leads", "Generate Leads"),
            ("brand", "Build Brand Awareness"),
            ("sales", "Drive Sales"),
        ],
    },
    SeedQuestion {
        text: "How large is your team?",
        order: 2,
        answers: &[
            ("1-10", "1-10 Employees"),
            ("11-50", "11-50 Employees"),
            ("50+", "50+ Employees"),
        ],
    },
];

impl Db {
    /// Insert the demo quizzes when the store has no quizzes yet.
    /// Returns whether anything was inserted.
    pub async fn ensure_seed_data(&self) -> Result<bool> {
        if self.quizzes_count().await? > 0 {
            tracing::debug!("store already has quizzes, skipping seed");
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;

        for quiz in SEED_QUIZZES {
            let quiz_id: i64 = sqlx::query_scalar(
                "INSERT INTO quizzes (name, slug, description, is_active, created_at) VALUES (?, ?, ?, 1, ?) RETURNING id",
            )
            .bind(quiz.name)
            .bind(quiz.slug)
            .bind(quiz.description)
            .bind(chrono::Utc::now())
            .fetch_one(&mut *tx)
            .await?;

            for question in SEED_QUESTIONS {
                let answers: Vec<Answer> = question
                    .answers
                    .iter()
                    .map(|(value, label)| Answer {
                        value: value.to_string(),
                        label: label.to_string(),
                    })
                    .collect();

                sqlx::query(
                    r#"
                    INSERT INTO questions (quiz_id, question_text, question_type, question_order, answers, is_active)
                    VALUES (?, ?, ?, ?, ?, 1)
                    "#,
                )
                .bind(quiz_id)
                .bind(question.text)
                .bind(QuestionType::MultipleChoice)
                .bind(question.order)
                .bind(Json(&answers))
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        tracing::info!(quizzes = SEED_QUIZZES.len(), "seed data inserted");
        Ok(true)
    }
}

use color_eyre::Result;

use crate::db::{Db, NewLead, QuestionModel, Quiz};
use crate::funnel::{progress_percentage, FunnelStep};
use crate::models::non_blank;

// ---------------------------------------------------------------------------
// FunnelRepository trait (the store operations the funnel needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait FunnelRepository: Send + Sync {
    fn quiz_by_slug(
        &self,
        slug: &str,
    ) -> impl std::future::Future<Output = Result<Option<Quiz>>> + Send;

    fn question_by_order(
        &self,
        quiz_id: i64,
        order: i64,
    ) -> impl std::future::Future<Output = Result<Option<QuestionModel>>> + Send;

    fn questions_count(
        &self,
        quiz_id: i64,
    ) -> impl std::future::Future<Output = Result<i64>> + Send;

    fn create_lead(
        &self,
        quiz_id: i64,
        lead: &NewLead,
    ) -> impl std::future::Future<Output = Result<i64>> + Send;
}

impl FunnelRepository for Db {
    fn quiz_by_slug(
        &self,
        slug: &str,
    ) -> impl std::future::Future<Output = Result<Option<Quiz>>> + Send {
        Db::quiz_by_slug(self, slug)
    }

    fn question_by_order(
        &self,
        quiz_id: i64,
        order: i64,
    ) -> impl std::future::Future<Output = Result<Option<QuestionModel>>> + Send {
        Db::question_by_order(self, quiz_id, order)
    }

    fn questions_count(
        &self,
        quiz_id: i64,
    ) -> impl std::future::Future<Output = Result<i64>> + Send {
        Db::questions_count(self, quiz_id)
    }

    fn create_lead(
        &self,
        quiz_id: i64,
        lead: &NewLead,
    ) -> impl std::future::Future<Output = Result<i64>> + Send {
        Db::create_lead(self, quiz_id, lead)
    }
}

// ---------------------------------------------------------------------------
// Inputs and outcomes
// ---------------------------------------------------------------------------

/// Contact details submitted on the lead form, as typed.
#[derive(Debug, Clone, Default)]
pub struct LeadInput {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub struct QuestionPage {
    pub quiz: Quiz,
    pub question: QuestionModel,
    pub order: u32,
    pub total_questions: i64,
    pub progress_percentage: f64,
}

pub enum QuestionOutcome {
    /// A question exists at the requested order.
    Show(QuestionPage),
    /// No question at this order: the respondent is done answering.
    Complete,
    QuizNotFound,
}

pub enum LeadOutcome {
    /// Lead stored. Contains the step to continue with.
    Captured(FunnelStep),
    /// Email was empty after trimming. Nothing was stored.
    EmailMissing,
    QuizNotFound,
}

// ---------------------------------------------------------------------------
// FunnelService
// ---------------------------------------------------------------------------

pub struct FunnelService<R: FunnelRepository = Db> {
    repo: R,
}

impl<R: FunnelRepository + Clone> Clone for FunnelService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<R: FunnelRepository> FunnelService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn intro(&self, slug: &str) -> Result<Option<Quiz>> {
        self.repo.quiz_by_slug(slug).await
    }

    /// Nothing is created when a respondent starts; the first question is
    /// simply order 1.
    pub async fn start(&self, slug: &str) -> Result<Option<FunnelStep>> {
        let Some(quiz) = self.repo.quiz_by_slug(slug).await? else {
            return Ok(None);
        };

        tracing::debug!(quiz_id = quiz.id, slug, "funnel started");
        Ok(Some(FunnelStep::Intro.after_answer()))
    }

    pub async fn question(&self, slug: &str, order: u32) -> Result<QuestionOutcome> {
        let Some(quiz) = self.repo.quiz_by_slug(slug).await? else {
            return Ok(QuestionOutcome::QuizNotFound);
        };

        let Some(question) = self.repo.question_by_order(quiz.id, i64::from(order)).await? else {
            tracing::debug!(quiz_id = quiz.id, order, "no question at order, funnel complete");
            return Ok(QuestionOutcome::Complete);
        };

        let total_questions = self.repo.questions_count(quiz.id).await?;

        Ok(QuestionOutcome::Show(QuestionPage {
            quiz,
            question,
            order,
            total_questions,
            progress_percentage: progress_percentage(order, total_questions),
        }))
    }

    /// The answer is accepted as free text, logged, and discarded.
    pub async fn submit_answer(
        &self,
        slug: &str,
        order: u32,
        answer: &str,
    ) -> Result<Option<FunnelStep>> {
        if self.repo.quiz_by_slug(slug).await?.is_none() {
            return Ok(None);
        }

        tracing::info!(slug, order, answer, "answer submitted");
        Ok(Some(FunnelStep::Question(order).after_answer()))
    }

    pub async fn lead_form(&self, slug: &str) -> Result<Option<Quiz>> {
        self.repo.quiz_by_slug(slug).await
    }

    pub async fn submit_lead(&self, slug: &str, input: LeadInput) -> Result<LeadOutcome> {
        let Some(quiz) = self.repo.quiz_by_slug(slug).await? else {
            return Ok(LeadOutcome::QuizNotFound);
        };

        let email = input.email.trim();
        if email.is_empty() {
            return Ok(LeadOutcome::EmailMissing);
        }

        let lead = NewLead {
            email: email.to_string(),
            first_name: non_blank(input.first_name),
            last_name: non_blank(input.last_name),
        };
        self.repo.create_lead(quiz.id, &lead).await?;

        Ok(LeadOutcome::Captured(FunnelStep::LeadForm.after_answer()))
    }

    pub async fn results(&self, slug: &str) -> Result<Option<Quiz>> {
        self.repo.quiz_by_slug(slug).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{parse_answer_labels, QuestionType};
    use mockall::predicate::{always, eq};
    use sqlx::types::Json;

    fn quiz(id: i64, slug: &str) -> Quiz {
        Quiz {
            id,
            slug: slug.to_string(),
            name: "Product Fit Quiz".to_string(),
            description: None,
            is_active: true,
            created_at: chrono::Utc::now(),
        }
    }

    fn question(quiz_id: i64, order: i64) -> QuestionModel {
        QuestionModel {
            id: order * 10,
            quiz_id,
            question_text: format!("Question {order}"),
            question_type: QuestionType::MultipleChoice,
            question_order: order,
            answers: Json(parse_answer_labels("Yes, No")),
            is_active: true,
        }
    }

    fn repo_with_quiz() -> MockFunnelRepository {
        let mut mock = MockFunnelRepository::new();
        mock.expect_quiz_by_slug()
            .withf(|slug| slug == "product-fit")
            .returning(|_| Box::pin(async { Ok(Some(quiz(7, "product-fit"))) }));
        mock
    }

    fn repo_without_quiz() -> MockFunnelRepository {
        let mut mock = MockFunnelRepository::new();
        mock.expect_quiz_by_slug()
            .returning(|_| Box::pin(async { Ok(None) }));
        mock.expect_create_lead().never();
        mock.expect_question_by_order().never();
        mock
    }

    /// A quiz whose question orders are exactly 1..=n.
    fn repo_with_questions(n: i64) -> MockFunnelRepository {
        let mut mock = repo_with_quiz();
        mock.expect_question_by_order()
            .with(eq(7), always())
            .returning(move |quiz_id, order| {
                Box::pin(async move {
                    Ok((1..=n).contains(&order).then(|| question(quiz_id, order)))
                })
            });
        mock.expect_questions_count()
            .returning(move |_| Box::pin(async move { Ok(n) }));
        mock
    }

    // ----- question tests -----

    #[tokio::test]
    async fn every_existing_order_shows_a_question_and_the_next_completes() {
        let n = 4;
        let svc = FunnelService::new(repo_with_questions(n));

        for order in 1..=n as u32 {
            let outcome = svc.question("product-fit", order).await.unwrap();
            assert!(
                matches!(outcome, QuestionOutcome::Show(ref page) if page.question.question_order == i64::from(order)),
                "expected a question at order {order}"
            );
        }

        let outcome = svc.question("product-fit", n as u32 + 1).await.unwrap();
        assert!(matches!(outcome, QuestionOutcome::Complete));
    }

    #[tokio::test]
    async fn empty_quiz_completes_at_the_first_question() {
        let svc = FunnelService::new(repo_with_questions(0));

        let outcome = svc.question("product-fit", 1).await.unwrap();

        assert!(matches!(outcome, QuestionOutcome::Complete));
    }

    #[tokio::test]
    async fn question_page_carries_progress() {
        let svc = FunnelService::new(repo_with_questions(5));

        let QuestionOutcome::Show(page) = svc.question("product-fit", 3).await.unwrap() else {
            panic!("expected a question page");
        };

        assert_eq!(page.total_questions, 5);
        assert_eq!(page.progress_percentage, 40.0);
        assert_eq!(page.quiz.slug, "product-fit");
    }

    #[tokio::test]
    async fn question_for_unknown_quiz_is_not_found() {
        let svc = FunnelService::new(repo_without_quiz());

        let outcome = svc.question("nope", 1).await.unwrap();

        assert!(matches!(outcome, QuestionOutcome::QuizNotFound));
    }

    #[tokio::test]
    async fn lookup_errors_propagate() {
        let mut mock = MockFunnelRepository::new();
        mock.expect_quiz_by_slug()
            .returning(|_| Box::pin(async { Err(color_eyre::eyre::eyre!("db down")) }));
        let svc = FunnelService::new(mock);

        assert!(svc.question("product-fit", 1).await.is_err());
        assert!(svc.intro("product-fit").await.is_err());
    }

    // ----- transition tests -----

    #[tokio::test]
    async fn start_goes_to_the_first_question() {
        let svc = FunnelService::new(repo_with_quiz());

        let step = svc.start("product-fit").await.unwrap();

        assert_eq!(step, Some(FunnelStep::Question(1)));
    }

    #[tokio::test]
    async fn start_for_unknown_quiz_is_none() {
        let svc = FunnelService::new(repo_without_quiz());

        assert_eq!(svc.start("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn any_answer_text_advances_by_one() {
        let svc = FunnelService::new(repo_with_quiz());

        for answer in ["leads", "", "not one of the options", "🙂"] {
            let step = svc.submit_answer("product-fit", 2, answer).await.unwrap();
            assert_eq!(step, Some(FunnelStep::Question(3)));
        }
    }

    #[tokio::test]
    async fn answer_for_unknown_quiz_is_none() {
        let svc = FunnelService::new(repo_without_quiz());

        assert_eq!(svc.submit_answer("nope", 1, "yes").await.unwrap(), None);
    }

    // ----- lead tests -----

    #[tokio::test]
    async fn lead_without_names_stores_nulls_and_goes_to_results() {
        let mut mock = repo_with_quiz();
        mock.expect_create_lead()
            .withf(|quiz_id, lead| {
                *quiz_id == 7
                    && lead.email == "a@b.com"
                    && lead.first_name.is_none()
                    && lead.last_name.is_none()
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(1) }));
        let svc = FunnelService::new(mock);

        let outcome = svc
            .submit_lead(
                "product-fit",
                LeadInput {
                    email: "a@b.com".to_string(),
                    first_name: Some("".to_string()),
                    last_name: None,
                },
            )
            .await
            .unwrap();

        assert!(matches!(outcome, LeadOutcome::Captured(FunnelStep::Results)));
    }

    #[tokio::test]
    async fn lead_fields_are_trimmed() {
        let mut mock = repo_with_quiz();
        mock.expect_create_lead()
            .withf(|_, lead| {
                lead.email == "ada@example.com"
                    && lead.first_name.as_deref() == Some("Ada")
                    && lead.last_name.as_deref() == Some("Lovelace")
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(1) }));
        let svc = FunnelService::new(mock);

        let outcome = svc
            .submit_lead(
                "product-fit",
                LeadInput {
                    email: "  ada@example.com ".to_string(),
                    first_name: Some(" Ada".to_string()),
                    last_name: Some("Lovelace ".to_string()),
                },
            )
            .await
            .unwrap();

        assert!(matches!(outcome, LeadOutcome::Captured(_)));
    }

    #[tokio::test]
    async fn repeated_lead_submissions_each_insert() {
        let mut mock = repo_with_quiz();
        mock.expect_create_lead()
            .times(2)
            .returning(|_, _| Box::pin(async { Ok(1) }));
        let svc = FunnelService::new(mock);

        for _ in 0..2 {
            let input = LeadInput {
                email: "a@b.com".to_string(),
                ..Default::default()
            };
            svc.submit_lead("product-fit", input).await.unwrap();
        }
    }

    #[tokio::test]
    async fn blank_email_is_refused_without_insert() {
        let mut mock = repo_with_quiz();
        mock.expect_create_lead().never();
        let svc = FunnelService::new(mock);

        let input = LeadInput {
            email: "   ".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
        };
        let outcome = svc.submit_lead("product-fit", input).await.unwrap();

        assert!(matches!(outcome, LeadOutcome::EmailMissing));
    }

    #[tokio::test]
    async fn lead_for_unknown_quiz_is_not_found() {
        let svc = FunnelService::new(repo_without_quiz());

        let input = LeadInput {
            email: "a@b.com".to_string(),
            ..Default::default()
        };
        let outcome = svc.submit_lead("nope", input).await.unwrap();

        assert!(matches!(outcome, LeadOutcome::QuizNotFound));
    }
}

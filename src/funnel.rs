//! Steps of the respondent-facing funnel and the pure rules between them.
//!
//! A funnel runs `Intro → Question(1) → … → Question(n) → LeadForm → Results`.
//! There is no "last question" marker: the funnel is complete as soon as the
//! lookup for the next order finds nothing.

use crate::names;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunnelStep {
    Intro,
    /// Exact `question_order` value, starting at 1.
    Question(u32),
    LeadForm,
    Results,
}

impl FunnelStep {
    pub const FIRST_QUESTION: FunnelStep = FunnelStep::Question(1);

    /// Canonical URL of this step for the quiz identified by `slug`.
    pub fn url(self, slug: &str) -> String {
        match self {
            FunnelStep::Intro => names::quiz_intro_url(slug),
            FunnelStep::Question(order) => names::quiz_question_url(slug, order),
            FunnelStep::LeadForm => names::lead_form_url(slug),
            FunnelStep::Results => names::results_url(slug),
        }
    }

    /// Where an answer submitted at this step leads. Whether that step exists
    /// is only decided when it is requested.
    pub fn after_answer(self) -> FunnelStep {
        match self {
            FunnelStep::Intro => FunnelStep::FIRST_QUESTION,
            FunnelStep::Question(order) => FunnelStep::Question(order.saturating_add(1)),
            FunnelStep::LeadForm => FunnelStep::Results,
            FunnelStep::Results => FunnelStep::Results,
        }
    }
}

/// Share of the funnel already behind the respondent when they reach `order`.
///
/// `total_questions` counts every question row of the quiz, so gaps in the
/// order sequence can push this past 100. An empty quiz reports 0.
pub fn progress_percentage(order: u32, total_questions: i64) -> f64 {
    if total_questions <= 0 {
        return 0.0;
    }
    (f64::from(order) - 1.0) / total_questions as f64 * 100.0
}

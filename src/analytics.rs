use crate::db::QuizLeadCount;

/// Rank quizzes by lead count, highest first, keeping at most `limit`.
///
/// The sort is stable: quizzes with equal counts stay in the order given.
pub fn top_quizzes_by_leads(mut counts: Vec<QuizLeadCount>, limit: usize) -> Vec<QuizLeadCount> {
    counts.sort_by(|a, b| b.lead_count.cmp(&a.lead_count));
    counts.truncate(limit);
    counts
}

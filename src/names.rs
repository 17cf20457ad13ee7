pub const HOME_URL: &str = "/";
pub const HEALTH_URL: &str = "/health";
pub const SET_LOCALE_URL: &str = "/set-locale";

pub const ADMIN_DASHBOARD_URL: &str = "/admin/dashboard";
pub const ADMIN_ANALYTICS_URL: &str = "/admin/analytics";
pub const ADMIN_LEADS_URL: &str = "/admin/leads";
pub const NEW_QUIZ_URL: &str = "/admin/quizzes/new";

pub fn edit_quiz_url(slug: &str) -> String {
    format!("/admin/quizzes/{slug}/edit")
}

pub fn questions_url(slug: &str) -> String {
    format!("/admin/quizzes/{slug}/questions")
}

pub fn new_question_url(slug: &str) -> String {
    format!("/admin/quizzes/{slug}/questions/new")
}

pub fn quiz_leads_url(slug: &str) -> String {
    format!("/admin/quizzes/{slug}/leads")
}

pub fn quiz_intro_url(slug: &str) -> String {
    format!("/quiz/{slug}")
}

pub fn start_quiz_url(slug: &str) -> String {
    format!("/quiz/{slug}/start")
}

pub fn quiz_question_url(slug: &str, order: u32) -> String {
    format!("/quiz/{slug}/question/{order}")
}

pub fn lead_form_url(slug: &str) -> String {
    format!("/quiz/{slug}/lead-form")
}

pub fn results_url(slug: &str) -> String {
    format!("/quiz/{slug}/results")
}

// Analytics
pub const TOP_QUIZZES_LIMIT: usize = 5;

// i18n
pub const LOCALE_COOKIE_NAME: &str = "lang";
pub const DEFAULT_LOCALE: &str = "en";
pub const SUPPORTED_LOCALES: &[&str] = &["en", "ja"];
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const QUIZ_NOT_FOUND: &str = "Quiz not found";

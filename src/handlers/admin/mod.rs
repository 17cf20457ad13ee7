mod question;
mod quiz;

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use maud::Markup;
use rust_i18n::t;

use crate::{
    analytics,
    extractors::Locale,
    names,
    rejections::{AppError, ResultExt},
    views,
    views::admin as admin_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::ADMIN_DASHBOARD_URL, get(dashboard))
        .route(names::ADMIN_ANALYTICS_URL, get(analytics_page))
        .route(names::ADMIN_LEADS_URL, get(leads))
        .route("/admin/quizzes/{slug}/leads", get(quiz_leads))
        .merge(quiz::routes())
        .merge(question::routes())
}

async fn dashboard(State(state): State<AppState>, Locale(locale): Locale) -> Result<Markup, AppError> {
    let quizzes = state
        .db
        .quiz_overviews()
        .await
        .reject("could not get quiz overviews")?;
    let total_leads = state.db.leads_count().await.reject("could not count leads")?;

    let data = admin_views::DashboardData {
        total_quizzes: quizzes.len(),
        quizzes,
        total_leads,
    };

    Ok(views::page(
        &t!("admin.dashboard_title", locale = &locale),
        admin_views::dashboard(&data, &locale),
        &locale,
    ))
}

async fn analytics_page(
    State(state): State<AppState>,
    Locale(locale): Locale,
) -> Result<Markup, AppError> {
    let counts = state
        .db
        .quiz_lead_counts()
        .await
        .reject("could not get lead counts")?;
    let top = analytics::top_quizzes_by_leads(counts, names::TOP_QUIZZES_LIMIT);

    Ok(views::page(
        &t!("analytics.title", locale = &locale),
        admin_views::analytics(&top, &locale),
        &locale,
    ))
}

async fn leads(State(state): State<AppState>, Locale(locale): Locale) -> Result<Markup, AppError> {
    let leads = state.db.lead_listings().await.reject("could not get leads")?;

    Ok(views::page(
        &t!("leads.title", locale = &locale),
        admin_views::leads(&leads, &locale),
        &locale,
    ))
}

async fn quiz_leads(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(slug): Path<String>,
) -> Result<Markup, AppError> {
    let quiz = state
        .db
        .quiz_by_slug(&slug)
        .await
        .reject("could not get quiz")?
        .ok_or(AppError::NotFound(names::QUIZ_NOT_FOUND))?;
    let leads = state
        .db
        .leads_for_quiz(quiz.id)
        .await
        .reject("could not get quiz leads")?;

    Ok(views::page(
        &t!("quiz_leads.title", locale = &locale, quiz = &quiz.name),
        admin_views::quiz_leads(&quiz, &leads, &locale),
        &locale,
    ))
}

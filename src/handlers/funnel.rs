use std::num::NonZeroU32;

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use maud::Markup;
use rust_i18n::t;
use serde::Deserialize;

use crate::{
    extractors::Locale,
    funnel::FunnelStep,
    names,
    rejections::{AppError, ResultExt},
    services::funnel::{LeadInput, LeadOutcome, QuestionOutcome},
    views,
    views::funnel as funnel_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/quiz/{slug}", get(intro))
        .route("/quiz/{slug}/start", get(start))
        .route("/quiz/{slug}/question/{order}", get(question).post(answer))
        .route("/quiz/{slug}/lead-form", get(lead_form).post(submit_lead))
        .route("/quiz/{slug}/results", get(results))
}

const QUIZ_NOT_FOUND: AppError = AppError::NotFound(names::QUIZ_NOT_FOUND);

async fn intro(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(slug): Path<String>,
) -> Result<Markup, AppError> {
    let quiz = state
        .funnel
        .intro(&slug)
        .await
        .reject("could not get quiz")?
        .ok_or(QUIZ_NOT_FOUND)?;

    Ok(views::funnel_page(&quiz.name, funnel_views::intro(&quiz, &locale), &locale))
}

async fn start(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Redirect, AppError> {
    let step = state
        .funnel
        .start(&slug)
        .await
        .reject("could not start funnel")?
        .ok_or(QUIZ_NOT_FOUND)?;

    Ok(Redirect::to(&step.url(&slug)))
}

async fn question(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path((slug, order)): Path<(String, NonZeroU32)>,
) -> Result<Response, AppError> {
    let outcome = state
        .funnel
        .question(&slug, order.get())
        .await
        .reject("could not get question")?;

    match outcome {
        QuestionOutcome::Show(page) => Ok(views::funnel_page(
            &page.quiz.name,
            funnel_views::question(&page, &locale),
            &locale,
        )
        .into_response()),
        QuestionOutcome::Complete => Ok(Redirect::to(&FunnelStep::LeadForm.url(&slug)).into_response()),
        QuestionOutcome::QuizNotFound => Err(QUIZ_NOT_FOUND),
    }
}

#[derive(Deserialize)]
struct AnswerBody {
    answer: String,
}

async fn answer(
    State(state): State<AppState>,
    Path((slug, order)): Path<(String, NonZeroU32)>,
    Form(body): Form<AnswerBody>,
) -> Result<Redirect, AppError> {
    let step = state
        .funnel
        .submit_answer(&slug, order.get(), &body.answer)
        .await
        .reject("could not submit answer")?
        .ok_or(QUIZ_NOT_FOUND)?;

    Ok(Redirect::to(&step.url(&slug)))
}

async fn lead_form(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(slug): Path<String>,
) -> Result<Markup, AppError> {
    let quiz = state
        .funnel
        .lead_form(&slug)
        .await
        .reject("could not get quiz")?
        .ok_or(QUIZ_NOT_FOUND)?;

    Ok(views::funnel_page(
        &t!("funnel.lead_title", locale = &locale),
        funnel_views::lead_form(&quiz, false, &locale),
        &locale,
    ))
}

#[derive(Deserialize)]
struct LeadBody {
    #[serde(default)]
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

async fn submit_lead(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(slug): Path<String>,
    Form(body): Form<LeadBody>,
) -> Result<Response, AppError> {
    let input = LeadInput {
        email: body.email,
        first_name: body.first_name,
        last_name: body.last_name,
    };

    match state
        .funnel
        .submit_lead(&slug, input)
        .await
        .reject("could not capture lead")?
    {
        LeadOutcome::Captured(step) => Ok(Redirect::to(&step.url(&slug)).into_response()),
        LeadOutcome::EmailMissing => {
            let quiz = state
                .funnel
                .lead_form(&slug)
                .await
                .reject("could not get quiz")?
                .ok_or(QUIZ_NOT_FOUND)?;
            let page = views::funnel_page(
                &t!("funnel.lead_title", locale = &locale),
                funnel_views::lead_form(&quiz, true, &locale),
                &locale,
            );
            Ok((StatusCode::BAD_REQUEST, page).into_response())
        }
        LeadOutcome::QuizNotFound => Err(QUIZ_NOT_FOUND),
    }
}

async fn results(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(slug): Path<String>,
) -> Result<Markup, AppError> {
    let quiz = state
        .funnel
        .results(&slug)
        .await
        .reject("could not get quiz")?
        .ok_or(QUIZ_NOT_FOUND)?;

    Ok(views::funnel_page(
        &t!("funnel.results_title", locale = &locale),
        funnel_views::results(&quiz, &locale),
        &locale,
    ))
}

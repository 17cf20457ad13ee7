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
    db::{self, NewQuiz, QuizUpdate},
    extractors::Locale,
    models::{self, deserialize_checkbox},
    names,
    rejections::{AppError, ResultExt},
    views,
    views::editor::{self, QuizEditorMode, QuizFormError, QuizFormValues},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::NEW_QUIZ_URL, get(new_quiz_form).post(create_quiz))
        .route("/admin/quizzes/{slug}/edit", get(edit_quiz_form).post(update_quiz))
}

#[derive(Deserialize)]
struct CreateQuizBody {
    name: String,
    slug: String,
    description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    is_active: bool,
}

#[derive(Deserialize)]
struct UpdateQuizBody {
    name: String,
    description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    is_active: bool,
}

fn editor_page(
    mode: &QuizEditorMode,
    values: &QuizFormValues,
    error: Option<QuizFormError>,
    locale: &str,
) -> Markup {
    let title = match mode {
        QuizEditorMode::Create => t!("quiz_editor.new_title", locale = locale),
        QuizEditorMode::Edit(_) => t!("quiz_editor.edit_title", locale = locale),
    };
    views::page(&title, editor::quiz_editor(mode, values, error, locale), locale)
}

async fn new_quiz_form(Locale(locale): Locale) -> Markup {
    let values = QuizFormValues {
        is_active: true,
        ..Default::default()
    };
    editor_page(&QuizEditorMode::Create, &values, None, &locale)
}

fn refused(
    body: CreateQuizBody,
    description: Option<String>,
    (status, error): (StatusCode, QuizFormError),
    locale: &str,
) -> Response {
    tracing::debug!(slug = body.slug.trim(), ?error, "quiz form refused");
    let values = QuizFormValues {
        slug: body.slug.trim().to_string(),
        name: body.name,
        description: description.unwrap_or_default(),
        is_active: body.is_active,
    };
    let page = editor_page(&QuizEditorMode::Create, &values, Some(error), locale);
    (status, page).into_response()
}

const SLUG_TAKEN: (StatusCode, QuizFormError) = (StatusCode::CONFLICT, QuizFormError::SlugTaken);

async fn create_quiz(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Form(body): Form<CreateQuizBody>,
) -> Result<Response, AppError> {
    let description = models::non_blank(body.description.clone());
    let slug = body.slug.trim();

    if !models::is_url_safe_slug(slug) {
        let invalid = (StatusCode::BAD_REQUEST, QuizFormError::SlugInvalid);
        return Ok(refused(body, description, invalid, &locale));
    }
    if state.db.slug_exists(slug).await.reject("could not check slug")? {
        return Ok(refused(body, description, SLUG_TAKEN, &locale));
    }

    let created = state
        .db
        .create_quiz(NewQuiz {
            name: body.name.trim(),
            slug,
            description: description.as_deref(),
            is_active: body.is_active,
        })
        .await;

    match created {
        Ok(_) => Ok(Redirect::to(names::ADMIN_DASHBOARD_URL).into_response()),
        Err(e) if db::is_unique_violation(&e) => Ok(refused(body, description, SLUG_TAKEN, &locale)),
        Err(e) => Err(e).reject("could not create quiz"),
    }
}

async fn edit_quiz_form(
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

    Ok(editor_page(
        &QuizEditorMode::Edit(quiz.slug.clone()),
        &QuizFormValues::from(&quiz),
        None,
        &locale,
    ))
}

async fn update_quiz(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(body): Form<UpdateQuizBody>,
) -> Result<Redirect, AppError> {
    let description = models::non_blank(body.description);

    let updated = state
        .db
        .update_quiz(
            &slug,
            QuizUpdate {
                name: body.name.trim(),
                description: description.as_deref(),
                is_active: body.is_active,
            },
        )
        .await
        .reject("could not update quiz")?;

    if !updated {
        tracing::debug!(slug, "no quiz to update");
    }

    Ok(Redirect::to(names::ADMIN_DASHBOARD_URL))
}

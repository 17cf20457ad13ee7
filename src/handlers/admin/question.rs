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
    db::{self, Db, NewQuestion, Quiz},
    extractors::Locale,
    models::{self, QuestionType},
    names,
    rejections::{AppError, ResultExt},
    views,
    views::editor::{self, QuestionFormError, QuestionFormValues},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/quizzes/{slug}/questions", get(question_list))
        .route(
            "/admin/quizzes/{slug}/questions/new",
            get(new_question_form).post(create_question),
        )
}

#[derive(Deserialize)]
struct CreateQuestionBody {
    question_text: String,
    question_type: String,
    question_order: String,
    #[serde(default)]
    answers: String,
}

async fn find_quiz(db: &Db, slug: &str) -> Result<Quiz, AppError> {
    db.quiz_by_slug(slug)
        .await
        .reject("could not get quiz")?
        .ok_or(AppError::NotFound(names::QUIZ_NOT_FOUND))
}

fn editor_page(
    quiz: &Quiz,
    values: &QuestionFormValues,
    error: Option<QuestionFormError>,
    locale: &str,
) -> Markup {
    views::page(
        &t!("question_editor.title", locale = locale, quiz = &quiz.name),
        editor::question_editor(quiz, values, error, locale),
        locale,
    )
}

async fn question_list(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(slug): Path<String>,
) -> Result<Markup, AppError> {
    let quiz = find_quiz(&state.db, &slug).await?;
    let questions = state
        .db
        .questions(quiz.id)
        .await
        .reject("could not get questions")?;

    Ok(views::page(
        &t!("questions.title", locale = &locale, quiz = &quiz.name),
        editor::question_list(&quiz, &questions, &locale),
        &locale,
    ))
}

async fn new_question_form(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(slug): Path<String>,
) -> Result<Markup, AppError> {
    let quiz = find_quiz(&state.db, &slug).await?;
    let next_order = state
        .db
        .questions(quiz.id)
        .await
        .reject("could not get questions")?
        .iter()
        .map(|q| q.question_order)
        .max()
        .unwrap_or(0)
        + 1;

    let values = QuestionFormValues {
        question_type: Some(QuestionType::MultipleChoice),
        question_order: Some(next_order),
        ..Default::default()
    };
    Ok(editor_page(&quiz, &values, None, &locale))
}

/// Orders are shown at `/quiz/{slug}/question/{order}`, which only accepts
/// 1..=u32::MAX.
fn order_in_range(order: i64) -> bool {
    u32::try_from(order).is_ok_and(|order| order >= 1)
}

fn refused(
    quiz: &Quiz,
    body: CreateQuestionBody,
    question_type: QuestionType,
    question_order: i64,
    (status, error): (StatusCode, QuestionFormError),
    locale: &str,
) -> Response {
    tracing::debug!(quiz_id = quiz.id, question_order, ?error, "question form refused");
    let values = QuestionFormValues {
        question_text: body.question_text,
        question_type: Some(question_type),
        question_order: Some(question_order),
        answers: body.answers,
    };
    (status, editor_page(quiz, &values, Some(error), locale)).into_response()
}

async fn create_question(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(slug): Path<String>,
    Form(body): Form<CreateQuestionBody>,
) -> Result<Response, AppError> {
    let quiz = find_quiz(&state.db, &slug).await?;

    let question_type = body
        .question_type
        .parse::<QuestionType>()
        .reject_input("unknown question type")?;
    let question_order = body
        .question_order
        .trim()
        .parse::<i64>()
        .reject_input("question order must be a whole number")?;

    const TAKEN: (StatusCode, QuestionFormError) = (StatusCode::CONFLICT, QuestionFormError::OrderTaken);

    if !order_in_range(question_order) {
        let invalid = (StatusCode::BAD_REQUEST, QuestionFormError::OrderInvalid);
        return Ok(refused(&quiz, body, question_type, question_order, invalid, &locale));
    }
    if state
        .db
        .question_order_taken(quiz.id, question_order)
        .await
        .reject("could not check question order")?
    {
        return Ok(refused(&quiz, body, question_type, question_order, TAKEN, &locale));
    }

    let answers = models::parse_answer_labels(&body.answers);
    let created = state
        .db
        .create_question(NewQuestion {
            quiz_id: quiz.id,
            question_text: body.question_text.trim(),
            question_type,
            question_order,
            answers: &answers,
        })
        .await;

    match created {
        Ok(_) => Ok(Redirect::to(&names::questions_url(&quiz.slug)).into_response()),
        // Lost a race against another insert at the same order
        Err(e) if db::is_unique_violation(&e) => {
            Ok(refused(&quiz, body, question_type, question_order, TAKEN, &locale))
        }
        Err(e) => Err(e).reject("could not create question"),
    }
}

use crate::db::{QuestionModel, Quiz};
use crate::models::QuestionType;
use crate::names;
use maud::{html, Markup};
use rust_i18n::t;

/// Values shown in the quiz form: the stored quiz when editing, or what the
/// admin just submitted when the form comes back with an error.
#[derive(Default)]
pub struct QuizFormValues {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub is_active: bool,
}

impl From<&Quiz> for QuizFormValues {
    fn from(quiz: &Quiz) -> Self {
        Self {
            name: quiz.name.clone(),
            slug: quiz.slug.clone(),
            description: quiz.description.clone().unwrap_or_default(),
            is_active: quiz.is_active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizFormError {
    SlugInvalid,
    SlugTaken,
}

pub enum QuizEditorMode {
    Create,
    /// Slug of the quiz being edited; it cannot be changed.
    Edit(String),
}

pub fn quiz_editor(
    mode: &QuizEditorMode,
    values: &QuizFormValues,
    error: Option<QuizFormError>,
    locale: &str,
) -> Markup {
    let (title, action) = match mode {
        QuizEditorMode::Create => (
            t!("quiz_editor.new_title", locale = locale),
            names::NEW_QUIZ_URL.to_string(),
        ),
        QuizEditorMode::Edit(slug) => (
            t!("quiz_editor.edit_title", locale = locale),
            names::edit_quiz_url(slug),
        ),
    };

    html! {
        h1 { (title) }
        article {
            @match error {
                Some(QuizFormError::SlugInvalid) => { p.form-error { (t!("quiz_editor.slug_invalid", locale = locale)) } }
                Some(QuizFormError::SlugTaken) => { p.form-error { (t!("quiz_editor.slug_taken", locale = locale)) } }
                None => {}
            }

            form method="post" action=(action) {
                label for="name" { (t!("quiz_editor.name", locale = locale)) }
                input type="text" id="name" name="name" value=(values.name) required;

                @if let QuizEditorMode::Create = mode {
                    label for="slug" { (t!("quiz_editor.slug", locale = locale)) }
                    input type="text" id="slug" name="slug" value=(values.slug) pattern="[a-z0-9_-]+" required;
                    small.muted { (t!("quiz_editor.slug_hint", locale = locale)) }
                }

                label for="description" { (t!("quiz_editor.description", locale = locale)) }
                textarea id="description" name="description" rows="3" { (values.description) }

                label {
                    @if values.is_active {
                        input type="checkbox" name="is_active" checked;
                    } @else {
                        input type="checkbox" name="is_active";
                    }
                    (t!("quiz_editor.is_active", locale = locale))
                }

                button type="submit" { (t!("quiz_editor.save", locale = locale)) }
                " "
                a.button.secondary href=(names::ADMIN_DASHBOARD_URL) { (t!("quiz_editor.cancel", locale = locale)) }
            }
        }
    }
}

pub fn question_type_label(question_type: QuestionType, locale: &str) -> String {
    let label = match question_type {
        QuestionType::MultipleChoice => t!("question_type.multiple_choice", locale = locale),
        QuestionType::Text => t!("question_type.text", locale = locale),
        QuestionType::Testimonial => t!("question_type.testimonial", locale = locale),
        QuestionType::ProductPage => t!("question_type.product_page", locale = locale),
    };
    label.to_string()
}

pub fn question_list(quiz: &Quiz, questions: &[QuestionModel], locale: &str) -> Markup {
    html! {
        h1 { (t!("questions.title", locale = locale, quiz = &quiz.name)) }

        a.button href=(names::new_question_url(&quiz.slug)) { (t!("questions.new", locale = locale)) }
        " "
        a.button.secondary href=(names::ADMIN_DASHBOARD_URL) { (t!("questions.back", locale = locale)) }

        article {
            @if questions.is_empty() {
                p { (t!("questions.empty", locale = locale)) }
            } @else {
                table {
                    thead { tr {
                        th { (t!("questions.order", locale = locale)) }
                        th { (t!("questions.text", locale = locale)) }
                        th { (t!("questions.type", locale = locale)) }
                        th { (t!("questions.answers", locale = locale)) }
                    } }
                    tbody {
                        @for question in questions {
                            tr {
                                td { (question.question_order) }
                                td { (question.question_text) }
                                td { (question_type_label(question.question_type, locale)) }
                                td {
                                    @for (i, answer) in question.answers.iter().enumerate() {
                                        @if i > 0 { ", " }
                                        (answer.label)
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Default)]
pub struct QuestionFormValues {
    pub question_text: String,
    pub question_type: Option<QuestionType>,
    pub question_order: Option<i64>,
    pub answers: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionFormError {
    OrderInvalid,
    OrderTaken,
}

pub fn question_editor(
    quiz: &Quiz,
    values: &QuestionFormValues,
    error: Option<QuestionFormError>,
    locale: &str,
) -> Markup {
    html! {
        h1 { (t!("question_editor.title", locale = locale, quiz = &quiz.name)) }
        article {
            @match error {
                Some(QuestionFormError::OrderInvalid) => { p.form-error { (t!("question_editor.order_invalid", locale = locale)) } }
                Some(QuestionFormError::OrderTaken) => { p.form-error { (t!("question_editor.order_taken", locale = locale)) } }
                None => {}
            }

            form method="post" action=(names::new_question_url(&quiz.slug)) {
                label for="question_text" { (t!("question_editor.text", locale = locale)) }
                input type="text" id="question_text" name="question_text" value=(values.question_text) required;

                label for="question_type" { (t!("question_editor.type", locale = locale)) }
                select id="question_type" name="question_type" {
                    @for question_type in QuestionType::ALL {
                        @if values.question_type == Some(question_type) {
                            option value=(question_type.as_str()) selected { (question_type_label(question_type, locale)) }
                        } @else {
                            option value=(question_type.as_str()) { (question_type_label(question_type, locale)) }
                        }
                    }
                }

                label for="question_order" { (t!("question_editor.order", locale = locale)) }
                input type="number" id="question_order" name="question_order" min="1"
                    value=[values.question_order] required;

                label for="answers" { (t!("question_editor.answers", locale = locale)) }
                input type="text" id="answers" name="answers" value=(values.answers);
                small.muted { (t!("question_editor.answers_hint", locale = locale)) }

                button type="submit" { (t!("question_editor.save", locale = locale)) }
                " "
                a.button.secondary href=(names::questions_url(&quiz.slug)) { (t!("quiz_editor.cancel", locale = locale)) }
            }
        }
    }
}

use crate::{
    db::Quiz,
    models::QuestionType,
    names,
    services::funnel::QuestionPage,
    utils,
};
use maud::{html, Markup};
use rust_i18n::t;

pub fn intro(quiz: &Quiz, locale: &str) -> Markup {
    html! {
        article {
            h1 { (quiz.name) }
            @if let Some(description) = &quiz.description {
                p { (description) }
            }
            a.button href=(names::start_quiz_url(&quiz.slug)) {
                (t!("funnel.start", locale = locale))
            }
        }
    }
}

pub fn question(page: &QuestionPage, locale: &str) -> Markup {
    let question = &page.question;
    let action = names::quiz_question_url(&page.quiz.slug, page.order);

    html! {
        div.progress role="progressbar"
            aria-valuenow=(format!("{:.0}", page.progress_percentage))
            aria-valuemin="0"
            aria-valuemax="100" {
            div style=(format!("width: {};", utils::progress_bar_width(page.progress_percentage))) {}
        }

        article {
            p.muted {
                (t!("funnel.question_of", locale = locale, order = page.order, total = page.total_questions))
            }
            h2 { (question.question_text) }

            form method="post" action=(action) {
                @match question.question_type {
                    QuestionType::MultipleChoice if question.answers.is_empty() => {
                        input type="hidden" name="answer" value="seen";
                    }
                    QuestionType::MultipleChoice => {
                        fieldset.answers {
                            @for answer in question.answers.iter() {
                                label {
                                    input type="radio" name="answer" value=(answer.value) required;
                                    (answer.label)
                                }
                            }
                        }
                    }
                    QuestionType::Text => {
                        label for="answer" { (t!("funnel.your_answer", locale = locale)) }
                        input type="text" id="answer" name="answer" required;
                    }
                    QuestionType::Testimonial | QuestionType::ProductPage => {
                        @for answer in question.answers.iter() {
                            p { (answer.label) }
                        }
                        input type="hidden" name="answer" value="seen";
                    }
                }
                button type="submit" { (t!("funnel.next", locale = locale)) }
            }
        }
    }
}

pub fn lead_form(quiz: &Quiz, email_missing: bool, locale: &str) -> Markup {
    html! {
        article {
            h1 { (t!("funnel.lead_title", locale = locale)) }
            p.muted { (t!("funnel.lead_desc", locale = locale, quiz = &quiz.name)) }

            @if email_missing {
                p.form-error { (t!("funnel.email_missing", locale = locale)) }
            }

            form method="post" action=(names::lead_form_url(&quiz.slug)) {
                label for="email" { (t!("funnel.email", locale = locale)) }
                input type="email" id="email" name="email" required;

                label for="first_name" { (t!("funnel.first_name", locale = locale)) }
                input type="text" id="first_name" name="first_name";

                label for="last_name" { (t!("funnel.last_name", locale = locale)) }
                input type="text" id="last_name" name="last_name";

                button type="submit" { (t!("funnel.submit", locale = locale)) }
            }
        }
    }
}

pub fn results(quiz: &Quiz, locale: &str) -> Markup {
    html! {
        article {
            h1 { (t!("funnel.results_title", locale = locale)) }
            p { (t!("funnel.results_body", locale = locale, quiz = &quiz.name)) }
            a.button.secondary href=(names::HOME_URL) { (t!("funnel.back_home", locale = locale)) }
        }
    }
}

use crate::{db::Quiz, names};
use maud::{html, Markup};
use rust_i18n::t;

pub fn landing_page(quizzes: &[Quiz], locale: &str) -> Markup {
    html! {
        section {
            h1 { (t!("landing.title", locale = locale)) }
            p.muted { (t!("landing.description", locale = locale)) }
            a.button href=(names::ADMIN_DASHBOARD_URL) { (t!("landing.admin_cta", locale = locale)) }
        }

        section {
            h2 { (t!("landing.quizzes_title", locale = locale)) }
            @if quizzes.is_empty() {
                p { (t!("landing.no_quizzes", locale = locale)) }
            }
            @for quiz in quizzes {
                article {
                    h3 { (quiz.name) }
                    @if let Some(description) = &quiz.description {
                        p.muted { (description) }
                    }
                    a.button.secondary href=(names::quiz_intro_url(&quiz.slug)) {
                        (t!("landing.take_quiz", locale = locale))
                    }
                }
            }
        }
    }
}

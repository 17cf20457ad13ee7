use crate::db::{LeadListing, LeadModel, Quiz, QuizLeadCount, QuizOverview};
use crate::names;
use maud::{html, Markup};
use rust_i18n::t;

pub struct DashboardData {
    pub quizzes: Vec<QuizOverview>,
    pub total_quizzes: usize,
    pub total_leads: i64,
}

fn status_badge(is_active: bool, locale: &str) -> Markup {
    html! {
        @if is_active {
            span.badge { (t!("admin.active", locale = locale)) }
        } @else {
            span.badge.inactive { (t!("admin.inactive", locale = locale)) }
        }
    }
}

pub fn dashboard(data: &DashboardData, locale: &str) -> Markup {
    html! {
        h1 { (t!("admin.dashboard_title", locale = locale)) }

        div.stats {
            article {
                strong { (data.total_quizzes) }
                (t!("admin.total_quizzes", locale = locale))
            }
            article {
                strong { (data.total_leads) }
                (t!("admin.total_leads", locale = locale))
            }
        }

        a.button href=(names::NEW_QUIZ_URL) { (t!("admin.new_quiz", locale = locale)) }

        article {
            @if data.quizzes.is_empty() {
                p { (t!("admin.no_quizzes", locale = locale)) }
            } @else {
                table {
                    thead { tr {
                        th { (t!("admin.col_name", locale = locale)) }
                        th { (t!("admin.col_slug", locale = locale)) }
                        th { (t!("admin.col_status", locale = locale)) }
                        th { (t!("admin.col_questions", locale = locale)) }
                        th { (t!("admin.col_leads", locale = locale)) }
                        th { (t!("admin.col_actions", locale = locale)) }
                    } }
                    tbody {
                        @for quiz in &data.quizzes {
                            tr {
                                td { (quiz.name) }
                                td { code { (quiz.slug) } }
                                td { (status_badge(quiz.is_active, locale)) }
                                td { (quiz.question_count) }
                                td { (quiz.lead_count) }
                                td {
                                    a href=(names::edit_quiz_url(&quiz.slug)) { (t!("admin.edit", locale = locale)) }
                                    " · "
                                    a href=(names::questions_url(&quiz.slug)) { (t!("admin.questions", locale = locale)) }
                                    " · "
                                    a href=(names::quiz_leads_url(&quiz.slug)) { (t!("admin.leads", locale = locale)) }
                                    " · "
                                    a href=(names::quiz_intro_url(&quiz.slug)) { (t!("admin.preview", locale = locale)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn analytics(top_quizzes: &[QuizLeadCount], locale: &str) -> Markup {
    html! {
        h1 { (t!("analytics.title", locale = locale)) }
        p.muted { (t!("analytics.subtitle", locale = locale, count = names::TOP_QUIZZES_LIMIT)) }

        article {
            @if top_quizzes.is_empty() {
                p { (t!("analytics.empty", locale = locale)) }
            } @else {
                table {
                    thead { tr {
                        th { (t!("analytics.rank", locale = locale)) }
                        th { (t!("analytics.quiz", locale = locale)) }
                        th { (t!("analytics.leads", locale = locale)) }
                    } }
                    tbody {
                        @for (rank, quiz) in top_quizzes.iter().enumerate() {
                            tr {
                                td { (rank + 1) }
                                td { (quiz.name) }
                                td { (quiz.lead_count) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn leads(leads: &[LeadListing], locale: &str) -> Markup {
    html! {
        h1 { (t!("leads.title", locale = locale)) }
        p.muted { (t!("leads.total", locale = locale, count = leads.len())) }

        article {
            @if leads.is_empty() {
                p { (t!("leads.empty", locale = locale)) }
            } @else {
                table {
                    thead { tr {
                        th { (t!("leads.email", locale = locale)) }
                        th { (t!("leads.name", locale = locale)) }
                        th { (t!("leads.quiz", locale = locale)) }
                        th { (t!("leads.submitted", locale = locale)) }
                    } }
                    tbody {
                        @for lead in leads {
                            @let name = full_name(lead.first_name.as_deref(), lead.last_name.as_deref());
                            tr {
                                td { (lead.email) }
                                td {
                                    @if name.is_empty() { span.muted { "-" } } @else { (name) }
                                }
                                td { a href=(names::questions_url(&lead.quiz_slug)) { (lead.quiz_name) } }
                                td { (lead.submission_date.format("%Y-%m-%d %H:%M").to_string()) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn full_name(first_name: Option<&str>, last_name: Option<&str>) -> String {
    [first_name, last_name]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn quiz_leads(quiz: &Quiz, leads: &[LeadModel], locale: &str) -> Markup {
    html! {
        h1 { (t!("quiz_leads.title", locale = locale, quiz = &quiz.name)) }
        p.muted { (t!("leads.total", locale = locale, count = leads.len())) }
        a.button.secondary href=(names::ADMIN_DASHBOARD_URL) { (t!("questions.back", locale = locale)) }

        article {
            @if leads.is_empty() {
                p { (t!("leads.empty", locale = locale)) }
            } @else {
                table {
                    thead { tr {
                        th { (t!("leads.email", locale = locale)) }
                        th { (t!("leads.name", locale = locale)) }
                        th { (t!("leads.submitted", locale = locale)) }
                    } }
                    tbody {
                        @for lead in leads {
                            @let name = full_name(lead.first_name.as_deref(), lead.last_name.as_deref());
                            tr {
                                td { (lead.email) }
                                td {
                                    @if name.is_empty() { span.muted { "-" } } @else { (name) }
                                }
                                td { (lead.submission_date.format("%Y-%m-%d %H:%M").to_string()) }
                            }
                        }
                    }
                }
            }
        }
    }
}

use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::names;

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn locale_switcher(locale: &str) -> Markup {
    html! {
        form method="post" action=(names::SET_LOCALE_URL) style="display: inline;" {
            select name="lang" aria-label=(t!("locale.label", locale = locale)) onchange="this.form.submit()" {
                @for supported in names::SUPPORTED_LOCALES {
                    @if *supported == locale {
                        option value=(supported) selected { (supported) }
                    } @else {
                        option value=(supported) { (supported) }
                    }
                }
            }
            noscript { button type="submit" { (t!("locale.switch", locale = locale)) } }
        }
    }
}

fn header(locale: &str) -> Markup {
    html! {
        header.site-header {
            a href=(names::HOME_URL) {
                strong { (t!("app.name", locale = locale)) }
            }
            nav {
                a href=(names::ADMIN_DASHBOARD_URL) { (t!("nav.dashboard", locale = locale)) }
                a href=(names::ADMIN_ANALYTICS_URL) { (t!("nav.analytics", locale = locale)) }
                a href=(names::ADMIN_LEADS_URL) { (t!("nav.leads", locale = locale)) }
                " "
                (locale_switcher(locale))
            }
        }
    }
}

fn footer(locale: &str) -> Markup {
    html! {
        footer.site-footer {
            (t!("footer.powered_by", locale = locale)) " · v" (names::VERSION)
        }
    }
}

pub fn page(title: &str, body: Markup, locale: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";

                (css())
                (icon())

                title { (title) " - " (t!("app.name", locale = locale)) }
            }

            body {
                (header(locale))
                main { (body) }
                (footer(locale))
            }
        }
    }
}

/// Respondent-facing pages drop the admin navigation.
pub fn funnel_page(title: &str, body: Markup, locale: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";

                (css())
                (icon())

                title { (title) }
            }

            body {
                main { (body) }
                (footer(locale))
            }
        }
    }
}

use axum::{
    extract::{Form, State},
    http::{
        header::{LOCATION, REFERER, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use maud::Markup;
use rust_i18n::t;
use serde::Deserialize;

use crate::{
    extractors::{match_supported_locale, Locale},
    names,
    rejections::{AppError, ResultExt},
    utils, views, AppState,
};

use crate::views::homepage as homepage_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::HOME_URL, get(homepage))
        .route(names::HEALTH_URL, get(health))
        .route(names::SET_LOCALE_URL, post(set_locale))
}

async fn homepage(State(state): State<AppState>, Locale(locale): Locale) -> Result<Markup, AppError> {
    let mut quizzes = state.db.quizzes().await.reject("could not get quizzes")?;
    // Respondents only see quizzes that are switched on
    quizzes.retain(|quiz| quiz.is_active);

    Ok(views::page(
        &t!("landing.title", locale = &locale),
        homepage_views::landing_page(&quizzes, &locale),
        &locale,
    ))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Deserialize)]
struct SetLocaleBody {
    lang: String,
}

async fn set_locale(
    headers: HeaderMap,
    Form(body): Form<SetLocaleBody>,
) -> Result<impl IntoResponse, AppError> {
    let locale = match_supported_locale(&body.lang).ok_or(AppError::Input("unsupported locale"))?;
    let cookie = utils::locale_cookie(locale).reject("could not build locale cookie")?;

    // Only same-site paths are followed back
    let back = headers
        .get(REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|referer| referer.find("://").map(|i| &referer[i + 3..]).or(Some(referer)))
        .and_then(|rest| rest.find('/').map(|i| &rest[i..]))
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .and_then(|path| HeaderValue::from_str(path).ok())
        .unwrap_or_else(|| HeaderValue::from_static(names::HOME_URL));

    Ok((StatusCode::SEE_OTHER, [(SET_COOKIE, cookie), (LOCATION, back)]))
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::views;

/// Errors a handler can end with.
#[derive(Debug)]
pub enum AppError {
    /// Lookup miss. Answered with a plain-text body, not a page.
    NotFound(&'static str),
    /// Request content could not be used.
    Input(&'static str),
    /// Something failed on our side; the cause has already been logged.
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            AppError::Input(message) => {
                (StatusCode::BAD_REQUEST, error_page("BAD_REQUEST", message)).into_response()
            }
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_page("INTERNAL_SERVER_ERROR", "Something went wrong."),
            )
                .into_response(),
        }
    }
}

fn error_page(code: &str, message: &str) -> maud::Markup {
    views::page(
        "Error",
        html! {
            h1 { (code) }
            p { (message) }
        },
        crate::names::DEFAULT_LOCALE,
    )
}

/// Fallback for unmatched routes.
pub async fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, error_page("NOT_FOUND", "There is nothing here.")).into_response()
}

pub trait ResultExt<T> {
    /// Log the error and turn it into [`AppError::Internal`].
    fn reject(self, context: &'static str) -> Result<T, AppError>;

    /// Log the error and turn it into [`AppError::Input`].
    fn reject_input(self, context: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for Result<T, E> {
    fn reject(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{context}: {e:?}");
            AppError::Internal
        })
    }

    fn reject_input(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{context}: {e:?}");
            AppError::Input(context)
        })
    }
}

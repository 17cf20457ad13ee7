use axum::http::HeaderValue;

pub const LOCALE_COOKIE_MAX_AGE: u32 = 60 * 60 * 24 * 365;

pub fn locale_cookie(
    locale: &str,
) -> Result<HeaderValue, axum::http::header::InvalidHeaderValue> {
    format!(
        "{}={locale}; Max-Age={LOCALE_COOKIE_MAX_AGE}; Path=/; SameSite=Lax",
        crate::names::LOCALE_COOKIE_NAME
    )
    .parse()
}

/// Width for a progress bar; the percentage itself may exceed 100.
pub fn progress_bar_width(progress_percentage: f64) -> String {
    format!("{:.0}%", progress_percentage.clamp(0.0, 100.0))
}

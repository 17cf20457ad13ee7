use std::path::Path;

use axum::{
    extract::Path as UrlPath,
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use include_dir::{include_dir, Dir};

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");
const STATIC_CACHE_CONTROL: &str = "max-age=3600, must-revalidate";

fn content_type(path: &Path) -> &'static str {
    match path.extension() {
        Some(ext) if ext == "css" => "text/css",
        Some(ext) if ext == "svg" => "image/svg+xml",
        Some(ext) if ext == "js" => "text/javascript",
        _ => "application/octet-stream",
    }
}

async fn send_file(UrlPath(path): UrlPath<String>) -> Response {
    let Some(file) = STATIC_DIR.get_file(Path::new(&path)) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    (
        [
            (CONTENT_TYPE, content_type(file.path())),
            (CACHE_CONTROL, STATIC_CACHE_CONTROL),
        ],
        file.contents(),
    )
        .into_response()
}

pub fn routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new().route("/{*path}", get(send_file))
}

rust_i18n::i18n!("locales", fallback = "en");

pub mod analytics;
pub mod db;
pub mod extractors;
pub mod funnel;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;
pub mod statics;
pub mod utils;
pub mod views;

use axum::Router;
use tower_http::trace::TraceLayer;

use services::funnel::FunnelService;

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
    pub funnel: FunnelService,
}

impl AppState {
    pub fn new(db: db::Db) -> Self {
        Self {
            funnel: FunnelService::new(db.clone()),
            db,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::admin::routes())
        .merge(handlers::funnel::routes())
        .nest("/static", statics::routes())
        .fallback(rejections::not_found_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

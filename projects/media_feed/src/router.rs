use std::sync::Arc;

use axum::{body::Bytes, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::endpoints::{
    favicon::index::handler as favicon_handler,
    health::{greeting::index::handler as greeting_handler, ping::index::handler as ping_handler},
    media::read_json::index::handler as media_read_json_handler,
};

/// Process-wide, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Favicon bytes loaded at startup, if the file was readable.
    pub favicon: Option<Bytes>,
}

impl AppState {
    pub fn new(config: AppConfig, favicon: Option<Bytes>) -> Self {
        Self { config: Arc::new(config), favicon }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting_handler))
        .route("/ping", get(ping_handler))
        .route("/json", get(media_read_json_handler))
        .route("/favicon.ico", get(favicon_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

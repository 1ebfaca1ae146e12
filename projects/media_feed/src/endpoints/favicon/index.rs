use std::path::Path;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::router::AppState;

/// Reads the favicon once; a missing file only disables the route.
pub async fn load_favicon(path: &Path) -> Option<Bytes> {
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            info!(path = %path.display(), size = bytes.len(), "favicon loaded");
            Some(Bytes::from(bytes))
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "favicon not loaded, /favicon.ico disabled");
            None
        }
    }
}

/// Axum handler: GET /favicon.ico
pub async fn handler(State(state): State<AppState>) -> Response {
    match state.favicon {
        Some(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

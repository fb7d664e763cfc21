use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::AppState;
use crate::handlers::mashup::{get_mashup, health};

pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/country/:name", get(get_mashup))
        .route("/healthz", get(health))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

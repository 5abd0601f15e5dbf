use std::path::Path;
use std::sync::Arc;

use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::generation::ImageGenerator;
use crate::shared::request_log::request_logger;

/// Общее состояние handler'ов
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn ImageGenerator>,
}

/// Конфигурация всех роутов приложения
///
/// Everything outside `/api` and `/health` is served from `static_dir`,
/// unknown paths fall back to `index.html`.
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/generate", post(handlers::generate::generate))
        .fallback_service(frontend)
        .with_state(state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

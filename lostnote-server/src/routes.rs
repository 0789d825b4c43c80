//! HTTP routes

use crate::handlers;
use crate::state::AppState;
use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// CORS policy from `LOSTNOTE_CORS_ORIGINS`: `*`, a comma-separated list,
/// or localhost origins for development
fn cors_layer(origins: Option<&str>) -> CorsLayer {
    match origins {
        Some("*") => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed))
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::new()
            .allow_origin(AllowOrigin::list([
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("http://localhost:5173"),
                HeaderValue::from_static("http://127.0.0.1:3000"),
                HeaderValue::from_static("http://127.0.0.1:5173"),
            ]))
            .allow_methods(Any)
            .allow_headers(Any),
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_origins.as_deref());
    let assets = ServeDir::new(&state.config.asset_root);

    let api_routes = Router::new()
        .route("/pages", get(handlers::list_pages))
        .route("/pages/:index", get(handlers::get_page))
        .route("/pages/:index/render", get(handlers::render_page_as))
        .route("/sheet-music", get(handlers::list_sheet_music));

    Router::new()
        .route("/", get(handlers::home))
        .route("/story", get(handlers::story))
        .route("/sheet-music", get(handlers::sheet_music))
        .route("/about", get(handlers::about))
        .route("/manifest.webmanifest", get(handlers::web_manifest))
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .nest_service("/assets", assets)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

use crate::{handlers, AppState};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Creates the Axum router and associates routes with handlers.
pub fn create_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    let static_files = state.assets.service();

    Router::new()
        .route("/admin", get(handlers::admin_page))
        .route("/user", get(handlers::user_page))
        .route("/api/get", get(handlers::get_content))
        .route(
            "/api/update",
            post(handlers::update_content).fallback(handlers::update_method_not_allowed),
        )
        .nest_service("/static", static_files)
        // Middleware Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

//! API layer - routes, handlers, and middleware

pub mod handlers;
pub mod middleware;

use axum::{
    http::StatusCode,
    middleware::from_fn,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let cors_origins = state.config.server.cors_origins.clone();

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
        .route(
            "/api/search",
            get(handlers::search::search).post(handlers::search::search),
        )
        .with_state(state)
        .layer(cors(&cors_origins))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(middleware::request_id_middleware))
}

/// CORS middleware. Empty origin list means no permissive headers.
fn cors(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new();
    }

    let mut header_values = Vec::with_capacity(origins.len());
    for origin in origins {
        if let Ok(value) = axum::http::HeaderValue::from_str(origin) {
            header_values.push(value);
        }
    }

    if header_values.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(header_values))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "merx"
    }))
}

async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "server": "merx search service",
            "version": env!("CARGO_PKG_VERSION"),
            "status": "running"
        })),
    )
}

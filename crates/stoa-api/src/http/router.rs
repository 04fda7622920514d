//! Axum router configuration with middleware.
//!
//! Route names match the deployed function names so existing clients keep
//! working. Middleware: permissive CORS headers on every response, tracing.

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::routing::{get, post};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/getPhilosopherResponseCallable",
            post(handlers::callable::get_persona_response_callable)
                .options(handlers::persona::preflight),
        )
        .route(
            "/getPhilosopherResponse",
            post(handlers::persona::get_persona_response).options(handlers::persona::preflight),
        )
        .route(
            "/testPhilosopherResponse",
            get(handlers::diagnostic::test_persona_response),
        )
        .route("/health", get(health_check))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

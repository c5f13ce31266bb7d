// Server module - builds the HTTP application from its state

use axum::Router;
use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::infrastructure::AppState;

/// Build the full router: catalog pages, session, admin and health.
pub fn build_router(state: AppState) -> Router {
    api::router(state).layer(TraceLayer::new_for_http())
}

/// CORS for the configured origins. An empty list allows none.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let mut allowed = Vec::new();
    for origin in origins {
        match origin.parse::<HeaderValue>() {
            Ok(v) => allowed.push(v),
            Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
        }
    }

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}

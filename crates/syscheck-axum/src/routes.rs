//! Route definitions and router construction.
//!
//! Handlers delegate to the shared GuiBackend facade.

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build the API routes without state applied.
///
/// Returns a router typed as `Router<AppState>` (state inferred from
/// handlers) but WITHOUT `.with_state()` applied - the caller applies it
/// before merging.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Environment status
        .route("/status", get(handlers::status::get))
        // Quick validation test
        .route("/test/quick", get(handlers::diagnostics::quick))
        // Comprehensive system test
        .route("/test", post(handlers::diagnostics::run))
}

/// Create the main Axum router with all API routes.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes().with_state(state).layer(cors))
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}

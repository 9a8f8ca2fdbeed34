//! API Routes
//!
//! Configures the Axum router with all simulator endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    access_handler, clear_handler, entries_handler, evictions_handler, health_handler,
    resize_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /access` - Access a file through the cache
/// - `GET /entries` - List cached files
/// - `GET /stats` - Statistics and space usage
/// - `GET /evictions` - Recent eviction history
/// - `PUT /capacity` - Adjust cache size
/// - `DELETE /cache` - Clear the cache
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/access", post(access_handler))
        .route("/entries", get(entries_handler))
        .route("/stats", get(stats_handler))
        .route("/evictions", get(evictions_handler))
        .route("/capacity", put(resize_handler))
        .route("/cache", delete(clear_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! API Routes
//!
//! Configures the Axum router with all catalog server endpoints.

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_item_handler, get_item_handler, health_handler, list_items_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/items` - List items with pagination and search
/// - `POST /api/items` - Create an item
/// - `GET /api/items/:id` - Retrieve a single item
/// - `GET /api/stats` - Collection stats
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route(
            "/api/items",
            get(list_items_handler).post(create_item_handler),
        )
        .route("/api/items/:id", get(get_item_handler))
        .route("/api/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

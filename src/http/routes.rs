use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Recording control
        .route("/capture/record/start", post(handlers::start_recording))
        .route("/capture/record/stop", post(handlers::stop_recording))
        // Artifact download
        .route("/capture/export", get(handlers::export_mocap))
        // Session queries
        .route("/capture/status", get(handlers::get_status))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

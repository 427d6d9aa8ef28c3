//! HTTP API server: the user-facing control surface
//!
//! This module exposes the three recording controls plus status:
//! - POST /capture/record/start - Start recording (409 while recording)
//! - POST /capture/record/stop - Stop recording (409 while idle)
//! - GET /capture/export - Download mocap_data.json (409 before first stop)
//! - GET /capture/status - Session stats and control enablement
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;

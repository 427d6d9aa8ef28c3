use super::state::AppState;
use crate::export::{EXPORT_FILENAME, EXPORT_MIME};
use crate::session::{ControlSet, SessionStats};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use serde::Serialize;
use tracing::{error, info};

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct RecordingResponse {
    pub session_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct StopRecordingResponse {
    pub session_id: String,
    pub status: String,
    pub message: String,
    pub stats: SessionStats,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub stats: SessionStats,
    pub controls: ControlSet,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /capture/record/start
/// Start recording landmark frames
pub async fn start_recording(State(state): State<AppState>) -> impl IntoResponse {
    let session_id = state.session.session_id().to_string();

    if !state.session.start_recording().await {
        // Interface-level guard: the Record control is disabled while
        // recording, so a request here is rejected, never a panic.
        return (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Already recording".to_string(),
            }),
        )
            .into_response();
    }

    info!("Recording started for session: {}", session_id);

    (
        StatusCode::OK,
        Json(RecordingResponse {
            session_id,
            status: "recording".to_string(),
            message: "Recording started".to_string(),
        }),
    )
        .into_response()
}

/// POST /capture/record/stop
/// Stop recording; the buffer is kept for export
pub async fn stop_recording(State(state): State<AppState>) -> impl IntoResponse {
    let session_id = state.session.session_id().to_string();

    if !state.session.stop_recording().await {
        return (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Not recording".to_string(),
            }),
        )
            .into_response();
    }

    info!("Recording stopped for session: {}", session_id);

    let stats = state.session.stats().await;

    (
        StatusCode::OK,
        Json(StopRecordingResponse {
            session_id,
            status: "stopped".to_string(),
            message: "Recording stopped".to_string(),
            stats,
        }),
    )
        .into_response()
}

/// GET /capture/export
/// Download the recorded landmark stream as mocap_data.json
pub async fn export_mocap(State(state): State<AppState>) -> impl IntoResponse {
    match state.session.export().await {
        Ok(Some(artifact)) => {
            info!(
                "Export served: {} bytes ({})",
                artifact.metadata.bytes_written,
                artifact.metadata.file_path.display()
            );

            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, EXPORT_MIME.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
                    ),
                ],
                artifact.json,
            )
                .into_response()
        }
        Ok(None) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Export unavailable: no completed recording yet".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to export: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to export: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// GET /capture/status
/// Session statistics plus control enablement
pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.session.stats().await;
    let controls = state.session.controls().await;

    (StatusCode::OK, Json(StatusResponse { stats, controls }))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

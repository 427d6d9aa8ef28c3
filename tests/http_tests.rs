// Router-level tests for the HTTP control surface: the endpoint guards
// mirror the control enablement, so invalid transitions come back as 409
// and the export download carries the fixed filename and JSON MIME.

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use face_mocap::{create_router, AppState, CaptureSession, DetectorSource, SessionConfig};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

fn test_router(temp_dir: &TempDir) -> Result<Router> {
    let config = SessionConfig {
        output_dir: temp_dir.path().to_path_buf(),
        ..SessionConfig::default()
    };
    let session = CaptureSession::new(config, DetectorSource::Scripted(Vec::new()))?;
    Ok(create_router(AppState::new(Arc::new(session))))
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let router = test_router(&temp_dir)?;

    let response = router.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_start_while_recording_is_conflict() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let router = test_router(&temp_dir)?;

    let response = router
        .clone()
        .oneshot(post("/capture/record/start"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(post("/capture/record/start"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"], "Already recording");

    Ok(())
}

#[tokio::test]
async fn test_stop_while_idle_is_conflict() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let router = test_router(&temp_dir)?;

    let response = router.oneshot(post("/capture/record/stop")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"], "Not recording");

    Ok(())
}

#[tokio::test]
async fn test_export_before_any_stop_is_conflict() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let router = test_router(&temp_dir)?;

    let response = router
        .clone()
        .oneshot(get("/capture/export"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Still unavailable while the first recording is in progress.
    router
        .clone()
        .oneshot(post("/capture/record/start"))
        .await
        .unwrap();
    let response = router.oneshot(get("/capture/export")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn test_export_download_after_stop() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let router = test_router(&temp_dir)?;

    let response = router
        .clone()
        .oneshot(post("/capture/record/start"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(post("/capture/record/stop"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router.oneshot(get("/capture/export")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE].to_str()?,
        "application/json"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION].to_str()?,
        "attachment; filename=\"mocap_data.json\""
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(bytes.as_ref(), b"[]");

    Ok(())
}

#[tokio::test]
async fn test_status_reports_state_and_controls() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let router = test_router(&temp_dir)?;

    let response = router.clone().oneshot(get("/capture/status")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["stats"]["state"], "idle");
    assert_eq!(body["controls"]["record"], true);
    assert_eq!(body["controls"]["stop"], false);
    assert_eq!(body["controls"]["export"], false);

    router
        .clone()
        .oneshot(post("/capture/record/start"))
        .await
        .unwrap();

    let response = router.oneshot(get("/capture/status")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["stats"]["state"], "recording");
    assert_eq!(body["controls"]["record"], false);
    assert_eq!(body["controls"]["stop"], true);
    assert_eq!(body["controls"]["export"], false);

    Ok(())
}

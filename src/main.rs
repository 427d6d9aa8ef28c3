use anyhow::Result;
use clap::Parser;
use face_mocap::{
    create_router, AppState, CaptureSession, Config, DetectorConfig, DetectorSource, NullSurface,
    SessionConfig,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "face-mocap", about = "Face motion-capture recording service")]
struct Args {
    /// Config file path without extension (e.g. config/face-mocap)
    #[arg(long, default_value = "config/face-mocap")]
    config: String,

    /// Replay a previously exported mocap_data.json instead of a live webcam
    #[arg(long)]
    replay: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v0.1.0", cfg.service.name);
    info!(
        "HTTP server will bind to {}:{}",
        cfg.service.http.bind, cfg.service.http.port
    );

    let frame_interval_ms = 1000 / u64::from(cfg.capture.frame_rate.max(1));
    let session_config = SessionConfig {
        detector: DetectorConfig {
            min_detection_confidence: cfg.capture.min_detection_confidence,
            min_tracking_confidence: cfg.capture.min_tracking_confidence,
            frame_interval_ms,
            ..DetectorConfig::default()
        },
        output_dir: PathBuf::from(&cfg.capture.output_dir),
        ..SessionConfig::default()
    };

    let source = match args.replay {
        Some(path) => DetectorSource::Replay(path),
        None => DetectorSource::Webcam,
    };

    let session = Arc::new(CaptureSession::new(session_config, source)?);

    let surface = Box::new(NullSurface::new(
        cfg.capture.surface_width,
        cfg.capture.surface_height,
    ));

    // Acquisition failure is reported once, not retried; with no frames
    // arriving the recorder simply accumulates nothing.
    if let Err(e) = session.start_capture(surface).await {
        error!("Failed to start capture: {}", e);
    }

    let state = AppState::new(Arc::clone(&session));
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub mod config;
pub mod export;
pub mod http;
pub mod landmarks;
pub mod render;
pub mod session;

pub use config::Config;
pub use export::{
    ExportArtifact, ExportConfig, ExportMetadata, MocapExporter, MocapFile, EXPORT_FILENAME,
    EXPORT_MIME,
};
pub use http::{create_router, AppState};
pub use landmarks::{
    DetectionResult, DetectorConfig, DetectorFactory, DetectorSource, LandmarkDetector,
    LandmarkFrame, LandmarkPoint,
};
pub use render::{
    to_pixel, CaptureBridge, Color, NullSurface, RenderSurface, MARKER_COLOR, MARKER_RADIUS,
};
pub use session::{
    CaptureSession, ControlSet, MocapBuffer, RecordingState, SessionConfig, SessionRecorder,
    SessionStats,
};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::info;

use super::types::DetectionResult;

/// Tuning options passed through to the underlying face-landmark engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Cap on simultaneously tracked faces.
    pub max_faces: usize,
    /// Enable landmark refinement in the underlying engine.
    pub refine_landmarks: bool,
    /// Minimum confidence for a new detection to be reported.
    pub min_detection_confidence: f32,
    /// Minimum confidence for an existing track to be kept.
    pub min_tracking_confidence: f32,
    /// Frame delivery pacing in milliseconds (affects scripted/replay sources).
    pub frame_interval_ms: u64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_faces: 1,
            refine_landmarks: true,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
            frame_interval_ms: 33, // ~30fps
        }
    }
}

/// Face-landmark detection backend trait
///
/// Implementations:
/// - Webcam: live camera feed through an external detector runtime
/// - Scripted: fixed result list (tests, demos)
/// - Replay: re-emits a previously exported mocap artifact
#[async_trait::async_trait]
pub trait LandmarkDetector: Send + Sync {
    /// Start the per-frame detection loop.
    ///
    /// Returns a channel receiver that delivers one result per processed
    /// frame, in frame order.
    async fn start(&mut self) -> Result<mpsc::Receiver<DetectionResult>>;

    /// Stop the detection loop.
    async fn stop(&mut self) -> Result<()>;

    /// Check if the detector is currently producing frames.
    fn is_running(&self) -> bool;

    /// Get detector name for logging.
    fn name(&self) -> &str;
}

/// Detector input source.
#[derive(Debug, Clone)]
pub enum DetectorSource {
    /// Live webcam feed (requires an external face-landmark runtime).
    Webcam,
    /// Fixed list of detection results (for testing/demos).
    Scripted(Vec<DetectionResult>),
    /// Re-emit the frames of a previously exported artifact.
    Replay(PathBuf),
}

/// Landmark detector factory
pub struct DetectorFactory;

impl DetectorFactory {
    /// Create a detector for the given source and tuning options.
    pub fn create(
        source: DetectorSource,
        config: DetectorConfig,
    ) -> Result<Box<dyn LandmarkDetector>> {
        info!(
            "Creating detector (max_faces={}, refine={}, det_conf={}, trk_conf={})",
            config.max_faces,
            config.refine_landmarks,
            config.min_detection_confidence,
            config.min_tracking_confidence
        );

        match source {
            DetectorSource::Webcam => {
                anyhow::bail!(
                    "Webcam detection requires an external face-landmark runtime; \
                     use a scripted or replay source"
                )
            }

            DetectorSource::Scripted(script) => {
                use super::sources::ScriptedDetector;
                Ok(Box::new(ScriptedDetector::new(script, config)))
            }

            DetectorSource::Replay(path) => {
                use super::sources::ReplayDetector;
                Ok(Box::new(ReplayDetector::new(path, config)))
            }
        }
    }
}

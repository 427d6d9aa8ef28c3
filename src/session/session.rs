use super::config::SessionConfig;
use super::recorder::SessionRecorder;
use super::stats::{ControlSet, SessionStats};
use crate::export::{ExportArtifact, ExportConfig, MocapExporter};
use crate::landmarks::{DetectorFactory, DetectorSource};
use crate::render::{CaptureBridge, RenderSurface};
use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// A capture session that wires the landmark detector, the render bridge,
/// and the session recorder together for the process lifetime.
///
/// The frame loop is the single consumer of the detector channel: results
/// are rendered and (while recording) appended strictly in arrival order.
/// Stopping the recording does not stop the frame loop; rendering continues.
pub struct CaptureSession {
    /// Session configuration
    config: SessionConfig,

    /// Detector source, consumed when capture starts
    source: Mutex<Option<DetectorSource>>,

    /// The record/stop/export state machine and its buffer
    recorder: Arc<Mutex<SessionRecorder>>,

    /// Writes export artifacts under the configured output directory
    exporter: MocapExporter,

    /// When the session was created
    started_at: chrono::DateTime<chrono::Utc>,

    /// Whether the frame loop is currently running
    is_capturing: Arc<AtomicBool>,

    /// Set when frame acquisition failed; no frames will ever arrive and
    /// the recording controls stay disabled
    capture_failed: Arc<AtomicBool>,

    /// Detection callbacks processed by the bridge
    frames_rendered: Arc<AtomicUsize>,

    /// Handle for the frame loop task
    capture_task: Arc<Mutex<Option<JoinHandle<()>>>>,

    /// Signals the frame loop to exit even while parked waiting for a frame
    shutdown: watch::Sender<bool>,
}

impl CaptureSession {
    /// Create a new capture session
    pub fn new(config: SessionConfig, source: DetectorSource) -> Result<Self> {
        info!("Creating capture session: {}", config.session_id);

        let exporter = MocapExporter::new(ExportConfig {
            output_dir: config.output_dir.clone(),
        })
        .context("Failed to create mocap exporter")?;

        let (shutdown, _) = watch::channel(false);

        Ok(Self {
            config,
            source: Mutex::new(Some(source)),
            recorder: Arc::new(Mutex::new(SessionRecorder::new())),
            exporter,
            started_at: Utc::now(),
            is_capturing: Arc::new(AtomicBool::new(false)),
            capture_failed: Arc::new(AtomicBool::new(false)),
            frames_rendered: Arc::new(AtomicUsize::new(0)),
            capture_task: Arc::new(Mutex::new(None)),
            shutdown,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.config.session_id
    }

    /// Start the frame loop, rendering onto the given surface.
    ///
    /// A detector failure here (e.g., no webcam runtime) is reported once
    /// and not retried; no frames will ever arrive.
    pub async fn start_capture(&self, surface: Box<dyn RenderSurface>) -> Result<()> {
        if self.is_capturing.load(Ordering::SeqCst) {
            warn!("Capture already running");
            return Ok(());
        }

        let source = self
            .source
            .lock()
            .await
            .take()
            .context("Capture already consumed its detector source")?;

        let mut detector = match DetectorFactory::create(source, self.config.detector.clone()) {
            Ok(detector) => detector,
            Err(e) => {
                self.capture_failed.store(true, Ordering::SeqCst);
                return Err(e.context("Failed to create landmark detector"));
            }
        };

        let mut result_rx = match detector.start().await {
            Ok(rx) => rx,
            Err(e) => {
                self.capture_failed.store(true, Ordering::SeqCst);
                return Err(e.context("Failed to start landmark detector"));
            }
        };

        self.is_capturing.store(true, Ordering::SeqCst);

        let recorder = Arc::clone(&self.recorder);
        let is_capturing = Arc::clone(&self.is_capturing);
        let frames_rendered = Arc::clone(&self.frames_rendered);
        let mut shutdown_rx = self.shutdown.subscribe();
        let mut bridge = CaptureBridge::new(surface);

        let task = tokio::spawn(async move {
            info!("Frame loop started ({})", detector.name());

            loop {
                tokio::select! {
                    maybe_result = result_rx.recv() => match maybe_result {
                        Some(result) => {
                            let mut recorder = recorder.lock().await;
                            match bridge.process(&result, &mut recorder) {
                                Ok(_) => {
                                    frames_rendered.fetch_add(1, Ordering::SeqCst);
                                }
                                // Fatal to this frame only; the loop keeps going.
                                Err(e) => warn!("Skipping frame: {}", e),
                            }
                        }
                        None => break,
                    },
                    // Unblocks the loop even while parked between frames.
                    _ = shutdown_rx.changed() => break,
                }
            }

            if let Err(e) = detector.stop().await {
                error!("Failed to stop detector: {}", e);
            }

            is_capturing.store(false, Ordering::SeqCst);
            info!("Frame loop stopped");
        });

        {
            let mut handle = self.capture_task.lock().await;
            *handle = Some(task);
        }

        info!("Capture started for session: {}", self.config.session_id);

        Ok(())
    }

    /// Wait for the frame loop to drain its detector channel and exit.
    ///
    /// Only meaningful for finite sources (scripted, replay); a live feed
    /// runs until [`CaptureSession::stop_capture`].
    pub async fn wait_capture(&self) -> Result<()> {
        let mut handle = self.capture_task.lock().await;
        if let Some(task) = handle.take() {
            if let Err(e) = task.await {
                error!("Capture task panicked: {}", e);
            }
        }
        Ok(())
    }

    /// Stop the frame loop and wait for it to finish.
    pub async fn stop_capture(&self) -> Result<()> {
        info!("Stopping capture for session: {}", self.config.session_id);
        self.is_capturing.store(false, Ordering::SeqCst);
        // Receiver may already be gone if the loop drained a finite source.
        let _ = self.shutdown.send(true);
        self.wait_capture().await
    }

    /// Start recording. Guarded no-op while already Recording or after a
    /// failed acquisition; returns whether the transition happened.
    pub async fn start_recording(&self) -> bool {
        if self.capture_failed.load(Ordering::SeqCst) {
            warn!("start ignored: frame acquisition failed, no frames will arrive");
            return false;
        }
        self.recorder.lock().await.start()
    }

    /// Stop recording. Guarded no-op while Idle; returns whether the
    /// transition happened.
    pub async fn stop_recording(&self) -> bool {
        self.recorder.lock().await.stop()
    }

    /// Produce the export artifact: serialize the buffer and persist it
    /// under the configured output directory.
    ///
    /// Returns `None` while export is unavailable (no stop has occurred
    /// yet). Reading the buffer mutates neither it nor the recorder state.
    pub async fn export(&self) -> Result<Option<ExportArtifact>> {
        let json = {
            let recorder = self.recorder.lock().await;
            if !recorder.can_export() {
                return Ok(None);
            }
            recorder.export_json()?
        };

        let metadata = self.exporter.write(&json)?;
        Ok(Some(ExportArtifact { json, metadata }))
    }

    /// Get current session statistics
    pub async fn stats(&self) -> SessionStats {
        let recorder = self.recorder.lock().await;
        let duration = Utc::now().signed_duration_since(self.started_at);

        SessionStats {
            state: recorder.state(),
            started_at: self.started_at,
            duration_secs: duration.num_milliseconds() as f64 / 1000.0,
            frames_rendered: self.frames_rendered.load(Ordering::SeqCst),
            frames_recorded: recorder.frames_recorded(),
            export_available: recorder.can_export(),
        }
    }

    /// Which user controls are currently enabled.
    ///
    /// After a failed acquisition every control stays disabled: no frames
    /// will ever arrive, so there is nothing to record or export.
    pub async fn controls(&self) -> ControlSet {
        if self.capture_failed.load(Ordering::SeqCst) {
            return ControlSet {
                record: false,
                stop: false,
                export: false,
            };
        }

        self.recorder.lock().await.controls()
    }
}

// Finite detector sources: scripted result lists and artifact replay.
//
// Both stand in for a live detector runtime: they deliver results over the
// same channel contract, paced by the configured frame interval, and close
// the channel when the source is exhausted.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};
use tracing::info;

use super::detector::{DetectorConfig, LandmarkDetector};
use super::types::DetectionResult;
use crate::export::MocapFile;

/// Spawn the frame-delivery task shared by finite sources.
///
/// The channel closes when the script runs out, the running flag drops, or
/// the consumer goes away.
fn spawn_emitter(
    script: Vec<DetectionResult>,
    interval_ms: u64,
    running: Arc<AtomicBool>,
) -> mpsc::Receiver<DetectionResult> {
    let (tx, rx) = mpsc::channel(100);

    tokio::spawn(async move {
        for result in script {
            if !running.load(Ordering::SeqCst) {
                break;
            }

            if tx.send(result).await.is_err() {
                break;
            }

            if interval_ms > 0 {
                sleep(Duration::from_millis(interval_ms)).await;
            }
        }

        running.store(false, Ordering::SeqCst);
    });

    rx
}

/// Emits a fixed list of detection results at the configured frame interval.
pub struct ScriptedDetector {
    script: Vec<DetectionResult>,
    config: DetectorConfig,
    running: Arc<AtomicBool>,
}

impl ScriptedDetector {
    pub fn new(script: Vec<DetectionResult>, config: DetectorConfig) -> Self {
        Self {
            script,
            config,
            running: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait::async_trait]
impl LandmarkDetector for ScriptedDetector {
    async fn start(&mut self) -> Result<mpsc::Receiver<DetectionResult>> {
        if self.running.load(Ordering::SeqCst) {
            bail!("Scripted detector already running");
        }

        let mut script = self.script.clone();

        // Honor the face cap the way a live engine would.
        for result in &mut script {
            result.faces.truncate(self.config.max_faces);
        }

        info!("Scripted detector started ({} results)", script.len());

        self.running.store(true, Ordering::SeqCst);
        Ok(spawn_emitter(
            script,
            self.config.frame_interval_ms,
            Arc::clone(&self.running),
        ))
    }

    async fn stop(&mut self) -> Result<()> {
        self.running.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Re-emits a previously exported mocap artifact, one face per frame.
pub struct ReplayDetector {
    path: PathBuf,
    config: DetectorConfig,
    running: Arc<AtomicBool>,
}

impl ReplayDetector {
    pub fn new(path: PathBuf, config: DetectorConfig) -> Self {
        Self {
            path,
            config,
            running: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait::async_trait]
impl LandmarkDetector for ReplayDetector {
    async fn start(&mut self) -> Result<mpsc::Receiver<DetectionResult>> {
        if self.running.load(Ordering::SeqCst) {
            bail!("Replay detector already running");
        }

        let file = MocapFile::open(&self.path)
            .with_context(|| format!("Failed to open replay source {:?}", self.path))?;

        let interval_ms = self.config.frame_interval_ms;
        let script: Vec<DetectionResult> = file
            .frames
            .into_iter()
            .enumerate()
            .map(|(i, frame)| DetectionResult {
                faces: vec![frame],
                timestamp_ms: i as u64 * interval_ms,
            })
            .collect();

        info!("Replay detector started ({} frames)", script.len());

        self.running.store(true, Ordering::SeqCst);
        Ok(spawn_emitter(
            script,
            interval_ms,
            Arc::clone(&self.running),
        ))
    }

    async fn stop(&mut self) -> Result<()> {
        self.running.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "replay"
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::landmarks::DetectorConfig;

/// Configuration for a capture session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g., "capture-2026-08-23-demo")
    pub session_id: String,

    /// Tuning passed to the landmark engine
    pub detector: DetectorConfig,

    /// Directory exported artifacts are written to
    pub output_dir: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("capture-{}", uuid::Uuid::new_v4()),
            detector: DetectorConfig::default(),
            output_dir: PathBuf::from("recordings"),
        }
    }
}

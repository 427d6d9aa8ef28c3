//! Export artifact writing and reading
//!
//! The artifact is a single JSON document: a top-level array with one
//! element per recorded frame, each element an array of `{x, y, z}` point
//! objects in normalized coordinates.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::landmarks::LandmarkFrame;

/// Fixed artifact filename.
pub const EXPORT_FILENAME: &str = "mocap_data.json";

/// MIME type the artifact is served with.
pub const EXPORT_MIME: &str = "application/json";

/// Exporter configuration
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory the artifact is written to
    pub output_dir: PathBuf,
}

/// Where and how large the written artifact is.
#[derive(Debug, Clone)]
pub struct ExportMetadata {
    pub file_path: PathBuf,
    pub bytes_written: usize,
}

/// A produced artifact: the serialized bytes plus write metadata.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub json: Vec<u8>,
    pub metadata: ExportMetadata,
}

/// Writes mocap JSON to the fixed artifact path.
pub struct MocapExporter {
    config: ExportConfig,
}

impl MocapExporter {
    pub fn new(config: ExportConfig) -> Result<Self> {
        fs::create_dir_all(&config.output_dir)
            .context("Failed to create export output directory")?;

        Ok(Self { config })
    }

    /// Persist pre-serialized mocap JSON, overwriting any previous artifact.
    pub fn write(&self, json: &[u8]) -> Result<ExportMetadata> {
        let file_path = self.config.output_dir.join(EXPORT_FILENAME);

        fs::write(&file_path, json)
            .with_context(|| format!("Failed to write artifact {:?}", file_path))?;

        info!(
            "Exported mocap artifact: {} ({} bytes)",
            file_path.display(),
            json.len()
        );

        Ok(ExportMetadata {
            file_path,
            bytes_written: json.len(),
        })
    }
}

/// A parsed mocap artifact.
pub struct MocapFile {
    pub path: String,
    pub frames: Vec<LandmarkFrame>,
}

impl MocapFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening mocap file: {}", path.display());

        let bytes = fs::read(path).context("Failed to read mocap file")?;
        let frames: Vec<LandmarkFrame> =
            serde_json::from_slice(&bytes).context("Failed to parse mocap JSON")?;

        info!("Mocap file loaded: {} frames", frames.len());

        Ok(Self {
            path: path.display().to_string(),
            frames,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

use anyhow::{Context, Result};

use crate::landmarks::LandmarkFrame;

/// Ordered landmark frames for one recording session.
///
/// Insertion order is temporal order. The buffer is replaced wholesale at
/// the start of a session and left intact when recording stops, so export
/// always sees the frames as of the last stop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MocapBuffer {
    frames: Vec<LandmarkFrame>,
}

impl MocapBuffer {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Replace contents with an empty sequence.
    pub fn reset(&mut self) {
        self.frames.clear();
    }

    pub fn push(&mut self, frame: LandmarkFrame) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[LandmarkFrame] {
        &self.frames
    }

    /// Serialize to the artifact format: a JSON array of frames, each frame
    /// an array of `{x, y, z}` objects. An empty buffer yields `[]`.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.frames).context("Failed to serialize mocap buffer")
    }
}

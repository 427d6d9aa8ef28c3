use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::buffer::MocapBuffer;
use super::stats::ControlSet;
use crate::landmarks::LandmarkFrame;

/// Recorder lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingState {
    /// Not recording. Initial state.
    Idle,
    /// Incoming landmark frames are appended to the buffer.
    Recording,
}

/// The record/stop/export lifecycle.
///
/// Owns the mocap buffer exclusively. Invalid transitions are guarded
/// no-ops rather than errors: callers gate their controls on
/// [`SessionRecorder::controls`] instead of handling failures.
pub struct SessionRecorder {
    state: RecordingState,
    buffer: MocapBuffer,
    stopped_once: bool,
}

impl SessionRecorder {
    pub fn new() -> Self {
        Self {
            state: RecordingState::Idle,
            buffer: MocapBuffer::new(),
            stopped_once: false,
        }
    }

    pub fn state(&self) -> RecordingState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == RecordingState::Recording
    }

    /// Begin a recording session. Valid only from Idle.
    ///
    /// Calling this while already Recording is a no-op and must not reset
    /// or truncate the buffer. Returns whether the transition happened.
    pub fn start(&mut self) -> bool {
        if self.state == RecordingState::Recording {
            warn!("start ignored: already recording");
            return false;
        }

        // The buffer resets here and only here; stop() leaves it intact.
        self.buffer.reset();
        self.state = RecordingState::Recording;

        info!("Recording started");
        true
    }

    /// End the recording session. Valid only from Recording.
    ///
    /// The buffer is left intact so export can read it. Returns whether the
    /// transition happened.
    pub fn stop(&mut self) -> bool {
        if self.state != RecordingState::Recording {
            warn!("stop ignored: not recording");
            return false;
        }

        self.state = RecordingState::Idle;
        self.stopped_once = true;

        info!("Recording stopped ({} frames buffered)", self.buffer.len());
        true
    }

    /// Append one landmark frame. Accepted only while Recording; returns
    /// whether the frame was buffered.
    pub fn append(&mut self, frame: LandmarkFrame) -> bool {
        if self.state != RecordingState::Recording {
            return false;
        }

        self.buffer.push(frame);
        true
    }

    /// Export becomes available once at least one stop() has occurred.
    pub fn can_export(&self) -> bool {
        self.stopped_once
    }

    /// Serialize the current buffer to artifact JSON.
    ///
    /// Pure read: mutates neither buffer nor state, so repeated calls with
    /// no intervening transitions produce byte-identical output. Callers
    /// gate on [`SessionRecorder::can_export`].
    pub fn export_json(&self) -> Result<Vec<u8>> {
        self.buffer.to_json()
    }

    pub fn frames_recorded(&self) -> usize {
        self.buffer.len()
    }

    pub fn buffer(&self) -> &MocapBuffer {
        &self.buffer
    }

    /// Which user controls are currently enabled.
    pub fn controls(&self) -> ControlSet {
        ControlSet {
            record: self.state == RecordingState::Idle,
            stop: self.state == RecordingState::Recording,
            export: self.stopped_once,
        }
    }
}

impl Default for SessionRecorder {
    fn default() -> Self {
        Self::new()
    }
}

//! Capture session management
//!
//! This module provides:
//! - `SessionRecorder`: the record/stop/export state machine and its
//!   exclusively-owned mocap buffer
//! - `MocapBuffer`: ordered landmark frames for one recording session
//! - `CaptureSession`: wires detector, render bridge, and recorder together
//!   for the process lifetime
//! - Session statistics and control enablement

mod buffer;
mod config;
mod recorder;
mod session;
mod stats;

pub use buffer::MocapBuffer;
pub use config::SessionConfig;
pub use recorder::{RecordingState, SessionRecorder};
pub use session::CaptureSession;
pub use stats::{ControlSet, SessionStats};

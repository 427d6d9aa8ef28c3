use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::recorder::RecordingState;

/// Point-in-time view of a capture session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Current recorder state
    pub state: RecordingState,

    /// When the capture session was created
    pub started_at: DateTime<Utc>,

    /// Session age in seconds
    pub duration_secs: f64,

    /// Frames processed by the render bridge (recording or not)
    pub frames_rendered: usize,

    /// Frames buffered in the current/most recent recording session
    pub frames_recorded: usize,

    /// Whether an export artifact can be produced
    pub export_available: bool,
}

/// Which user controls are currently enabled.
///
/// Invalid transitions are prevented by disabling the control, never by
/// raising an error after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSet {
    /// Record: enabled while Idle
    pub record: bool,
    /// Stop: enabled while Recording
    pub stop: bool,
    /// Export: enabled once a stop has occurred
    pub export: bool,
}

// Capture/render bridge: one call per detection callback.
//
// Rendering uses pixel-mapped coordinates; recording keeps the normalized
// coordinates, so the persisted data is independent of display resolution.

use anyhow::{bail, Result};

use super::surface::{RenderSurface, MARKER_COLOR, MARKER_RADIUS};
use crate::landmarks::{DetectionResult, LandmarkPoint};
use crate::session::SessionRecorder;

/// Map a normalized landmark to output-surface pixel coordinates.
pub fn to_pixel(point: &LandmarkPoint, width: u32, height: u32) -> (f32, f32) {
    (point.x * width as f32, point.y * height as f32)
}

/// Receives per-frame detection results, draws markers, and forwards
/// landmark frames to the recorder while a recording session is active.
pub struct CaptureBridge {
    surface: Box<dyn RenderSurface>,
}

impl CaptureBridge {
    pub fn new(surface: Box<dyn RenderSurface>) -> Self {
        Self { surface }
    }

    /// Change the output resolution between frames.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
    }

    /// Process one detection callback.
    ///
    /// Always clears the surface first, so stale marks never survive into
    /// the next frame. Zero detected faces is not an error. A non-finite
    /// landmark invalidates the whole callback: nothing is drawn or
    /// appended and the caller continues with the next frame.
    ///
    /// Returns the number of frames appended to the recorder.
    pub fn process(
        &mut self,
        result: &DetectionResult,
        recorder: &mut SessionRecorder,
    ) -> Result<usize> {
        self.surface.clear();

        for face in &result.faces {
            if !face.is_finite() {
                bail!(
                    "Detector produced a non-finite landmark at {}ms",
                    result.timestamp_ms
                );
            }
        }

        let width = self.surface.width();
        let height = self.surface.height();
        let mut appended = 0;

        for face in &result.faces {
            for point in face.points() {
                let (px, py) = to_pixel(point, width, height);
                self.surface.draw_marker(px, py, MARKER_RADIUS, MARKER_COLOR);
            }

            // Storage stays in normalized coordinates.
            if recorder.is_recording() && recorder.append(face.clone()) {
                appended += 1;
            }
        }

        Ok(appended)
    }
}

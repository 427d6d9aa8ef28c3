//! Capture/render bridge and the output surface contract
//!
//! The bridge is invoked once per detection callback: clear, map normalized
//! coordinates to pixels, draw fixed-radius markers, and forward normalized
//! frames to the recorder while recording.

pub mod bridge;
pub mod surface;

pub use bridge::{to_pixel, CaptureBridge};
pub use surface::{Color, NullSurface, RenderSurface, MARKER_COLOR, MARKER_RADIUS};

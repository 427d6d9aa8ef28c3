use serde::{Deserialize, Serialize};

/// A single detector-produced 3D point describing one tracked facial feature.
///
/// Coordinates are normalized (detector-defined range, typically [0, 1]
/// relative to the video frame dimensions) and immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl LandmarkPoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Ordered landmarks for one detected face in one video frame.
///
/// Serializes transparently as a JSON array of `{x, y, z}` objects, which is
/// exactly one element of the exported artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkFrame(Vec<LandmarkPoint>);

impl LandmarkFrame {
    pub fn new(points: Vec<LandmarkPoint>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[LandmarkPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All coordinates finite. Checked at the detector-adapter boundary;
    /// a frame failing this invalidates only the callback that produced it.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|p| p.is_finite())
    }
}

impl From<Vec<LandmarkPoint>> for LandmarkFrame {
    fn from(points: Vec<LandmarkPoint>) -> Self {
        Self(points)
    }
}

/// Per-frame output of the detector: zero or more detected faces.
///
/// Zero faces is a normal result, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionResult {
    /// One landmark frame per detected face, normalized coordinates.
    pub faces: Vec<LandmarkFrame>,
    /// Milliseconds since the detection loop started.
    pub timestamp_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_finiteness() {
        assert!(LandmarkPoint::new(0.5, 0.5, 0.0).is_finite());
        assert!(!LandmarkPoint::new(f32::NAN, 0.5, 0.0).is_finite());
        assert!(!LandmarkPoint::new(0.5, f32::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_frame_serializes_as_point_array() {
        let frame = LandmarkFrame::new(vec![
            LandmarkPoint::new(0.25, 0.5, 0.1),
            LandmarkPoint::new(0.75, 0.5, 0.2),
        ]);

        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.starts_with('['), "frame must serialize as an array");

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let points = value.as_array().unwrap();
        assert_eq!(points.len(), 2);
        assert!(points[0].get("x").is_some());
        assert!(points[0].get("y").is_some());
        assert!(points[0].get("z").is_some());
    }

    #[test]
    fn test_frame_finiteness_covers_all_points() {
        let frame = LandmarkFrame::new(vec![
            LandmarkPoint::new(0.1, 0.2, 0.3),
            LandmarkPoint::new(0.4, f32::NAN, 0.6),
        ]);
        assert!(!frame.is_finite());
    }
}

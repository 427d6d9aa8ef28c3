//! Landmark data model and detector contract
//!
//! Detection and tracking are delegated to an external engine; this module
//! defines the validated data types crossing that boundary
//! (`LandmarkPoint`, `LandmarkFrame`, `DetectionResult`), the
//! `LandmarkDetector` trait, and the finite sources used for tests and
//! replay.

pub mod detector;
pub mod sources;
pub mod types;

pub use detector::{DetectorConfig, DetectorFactory, DetectorSource, LandmarkDetector};
pub use sources::{ReplayDetector, ScriptedDetector};
pub use types::{DetectionResult, LandmarkFrame, LandmarkPoint};

//! Pose detector boundary.
//!
//! The detector is a polymorphic capability: given one frame it either returns
//! the named landmark positions or an explicit miss. Misses are a per-frame
//! condition, never a failure. Detectors are constructed and owned per run;
//! there is no process-wide instance.

pub mod scripted;

pub use scripted::{ScriptedDetector, ScriptedPose};

use serde::{Deserialize, Serialize};

use crate::models::Point2D;
use crate::video::Frame;

// MediaPipe pose landmark indices for the left leg.
pub const LEFT_HIP: usize = 23;
pub const LEFT_KNEE: usize = 25;
pub const LEFT_ANKLE: usize = 27;

/// The left-leg landmark positions resolved from one detected pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkFrame {
    pub left_hip: Point2D,
    pub left_knee: Point2D,
    pub left_ankle: Point2D,
}

impl LandmarkFrame {
    /// Picks the left-leg positions out of a full pose result, `None` when the
    /// result is too short to contain them.
    pub fn from_pose_points(points: &[Point2D]) -> Option<Self> {
        if points.len() <= LEFT_ANKLE {
            return None;
        }
        Some(Self {
            left_hip: points[LEFT_HIP],
            left_knee: points[LEFT_KNEE],
            left_ankle: points[LEFT_ANKLE],
        })
    }
}

/// Outcome of running the detector on one frame. Callers must handle the miss
/// case explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Detection {
    Detected(LandmarkFrame),
    NotDetected,
}

/// A body-landmark detector.
///
/// Detection takes `&mut self` because implementations generally track state
/// between frames and are not thread-safe; one detector serves one pipeline
/// run at a time. Never fails on a valid frame.
pub trait PoseDetector {
    fn detect(&mut self, frame: &Frame) -> Detection;
}

/// Tuning knobs passed through to detector implementations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectorConfig {
    /// Detections scored below this are reported as misses.
    pub min_detection_confidence: f64,
    pub min_tracking_confidence: f64,
    pub model_complexity: u8,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
            model_complexity: 1,
        }
    }
}

//! Deterministic detector that replays a precomputed landmark script.
//!
//! Scripts come from an offline detector pass (one entry per frame, `null`
//! for frames with no body) and make runs reproducible without the native
//! model.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{Detection, DetectorConfig, LandmarkFrame, PoseDetector};
use crate::video::Frame;

/// One frame's entry in a landmark script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptedPose {
    /// Detector confidence for this frame's pose.
    pub confidence: f64,
    #[serde(flatten)]
    pub landmarks: LandmarkFrame,
}

#[derive(Debug, Clone)]
pub struct ScriptedDetector {
    entries: Vec<Option<ScriptedPose>>,
    cursor: usize,
    config: DetectorConfig,
}

impl ScriptedDetector {
    pub fn new(entries: Vec<Option<ScriptedPose>>) -> Self {
        Self::with_config(entries, DetectorConfig::default())
    }

    pub fn with_config(entries: Vec<Option<ScriptedPose>>, config: DetectorConfig) -> Self {
        Self {
            entries,
            cursor: 0,
            config,
        }
    }

    /// Parses a JSON array of per-frame entries.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let entries: Vec<Option<ScriptedPose>> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("could not read landmark script {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("could not parse landmark script {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PoseDetector for ScriptedDetector {
    fn detect(&mut self, _frame: &Frame) -> Detection {
        let entry = self.entries.get(self.cursor).cloned().flatten();
        self.cursor += 1;

        // Frames past the end of the script, and entries gated out by the
        // confidence threshold, are plain misses.
        match entry {
            Some(pose) if pose.confidence >= self.config.min_detection_confidence => {
                Detection::Detected(pose.landmarks)
            }
            _ => Detection::NotDetected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point2D;

    fn pose(confidence: f64) -> ScriptedPose {
        ScriptedPose {
            confidence,
            landmarks: LandmarkFrame {
                left_hip: Point2D::new(0.5, 0.4),
                left_knee: Point2D::new(0.5, 0.6),
                left_ankle: Point2D::new(0.5, 0.8),
            },
        }
    }

    fn blank_frame() -> Frame {
        Frame::new(2, 2)
    }

    #[test]
    fn replays_entries_in_order() {
        let mut detector = ScriptedDetector::new(vec![Some(pose(0.9)), None, Some(pose(0.8))]);
        let frame = blank_frame();

        assert!(matches!(detector.detect(&frame), Detection::Detected(_)));
        assert_eq!(detector.detect(&frame), Detection::NotDetected);
        assert!(matches!(detector.detect(&frame), Detection::Detected(_)));
        // Past the end of the script.
        assert_eq!(detector.detect(&frame), Detection::NotDetected);
    }

    #[test]
    fn low_confidence_entries_are_misses() {
        let mut detector = ScriptedDetector::new(vec![Some(pose(0.3))]);
        assert_eq!(detector.detect(&blank_frame()), Detection::NotDetected);
    }

    #[test]
    fn parses_a_json_script() {
        let json = r#"[
            {
                "confidence": 0.93,
                "leftHip": { "x": 0.52, "y": 0.41 },
                "leftKnee": { "x": 0.55, "y": 0.62 },
                "leftAnkle": { "x": 0.53, "y": 0.83 }
            },
            null
        ]"#;

        let mut detector = ScriptedDetector::from_json(json).unwrap();
        assert_eq!(detector.len(), 2);

        let frame = blank_frame();
        match detector.detect(&frame) {
            Detection::Detected(landmarks) => {
                assert_eq!(landmarks.left_hip, Point2D::new(0.52, 0.41));
            }
            Detection::NotDetected => panic!("first entry should detect"),
        }
        assert_eq!(detector.detect(&frame), Detection::NotDetected);
    }
}

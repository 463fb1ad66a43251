//! Per-frame measurement records.
//!
//! One `JointAngleSample` is created for every frame the detector resolves a
//! body in, immediately after the angle is computed, and never mutated after
//! that.

use serde::{Deserialize, Serialize};

/// A position in normalized image space, both coordinates in [0, 1] as
/// reported by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The measurement taken from one successfully detected frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JointAngleSample {
    /// Zero-based position of the frame in the video's decode order. Strictly
    /// increasing across a series, with gaps where detection missed.
    pub frame_index: u64,
    pub hip: Point2D,
    pub knee: Point2D,
    pub ankle: Point2D,
    /// Interior angle at the knee, degrees in [0, 180].
    pub angle_degrees: f64,
}

/// Ordered series of samples for one pipeline run, ascending by `frame_index`.
/// Holds at most one sample per frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AngleSeries {
    samples: Vec<JointAngleSample>,
}

impl AngleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sample. Callers must push in frame order; the pipeline's
    /// sequential loop guarantees this.
    pub fn push(&mut self, sample: JointAngleSample) {
        debug_assert!(
            self.samples
                .last()
                .map_or(true, |prev| prev.frame_index < sample.frame_index),
            "samples must be pushed in ascending frame order"
        );
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JointAngleSample> {
        self.samples.iter()
    }

    pub fn samples(&self) -> &[JointAngleSample] {
        &self.samples
    }
}

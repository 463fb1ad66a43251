//! The sequential frame-to-measurement loop.

use log::info;

use crate::detect::{Detection, PoseDetector};
use crate::error::SourceError;
use crate::models::{AngleSeries, JointAngleSample};
use crate::pipeline::angle::knee_angle;
use crate::video::FrameSource;

const PROGRESS_LOG_INTERVAL: u64 = 100;

/// Everything one run measured, before export.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub series: AngleSeries,
    /// Frames pulled from the source, samples or not.
    pub frames_seen: u64,
    /// Frames where the detector found no body.
    pub misses: u64,
}

/// Drives frames from `source` through `detector`, one at a time, and
/// accumulates a sample per detected frame.
///
/// Each frame is fully processed before the next is pulled, so series order
/// matches input order by construction. Frames with no detected body are
/// skipped without error; the frame counter still advances, so `frame_index`
/// reflects position in the original video and the series has gaps at missed
/// frames. The only way the loop ends is the source running out; a source
/// error (unavailable on first access) aborts the run with no output.
pub fn run_pipeline(
    source: &mut dyn FrameSource,
    detector: &mut dyn PoseDetector,
) -> Result<PipelineOutput, SourceError> {
    let mut series = AngleSeries::new();
    let mut frame_index: u64 = 0;
    let mut misses: u64 = 0;

    while let Some(frame) = source.next_frame()? {
        match detector.detect(&frame) {
            Detection::Detected(landmarks) => {
                let angle_degrees =
                    knee_angle(landmarks.left_hip, landmarks.left_knee, landmarks.left_ankle);
                series.push(JointAngleSample {
                    frame_index,
                    hip: landmarks.left_hip,
                    knee: landmarks.left_knee,
                    ankle: landmarks.left_ankle,
                    angle_degrees,
                });
            }
            Detection::NotDetected => {
                misses += 1;
            }
        }

        frame_index += 1;
        if frame_index % PROGRESS_LOG_INTERVAL == 0 {
            info!("processed {} frames ({} samples)", frame_index, series.len());
        }
    }

    info!(
        "pipeline finished: {} frames, {} samples, {} misses",
        frame_index,
        series.len(),
        misses
    );

    Ok(PipelineOutput {
        series,
        frames_seen: frame_index,
        misses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{LandmarkFrame, ScriptedDetector, ScriptedPose};
    use crate::models::Point2D;
    use crate::video::Frame;

    /// Source yielding a fixed number of blank frames.
    struct CountingSource {
        remaining: usize,
    }

    impl FrameSource for CountingSource {
        fn next_frame(&mut self) -> Result<Option<Frame>, SourceError> {
            if self.remaining == 0 {
                return Ok(None);
            }
            self.remaining -= 1;
            Ok(Some(Frame::new(2, 2)))
        }
    }

    /// Source that fails on first access, like an unreadable video path.
    struct BrokenSource;

    impl FrameSource for BrokenSource {
        fn next_frame(&mut self) -> Result<Option<Frame>, SourceError> {
            Err(SourceError::unavailable("walk.mp4", "corrupt header"))
        }
    }

    fn pose(y: f64) -> Option<ScriptedPose> {
        Some(ScriptedPose {
            confidence: 0.9,
            landmarks: LandmarkFrame {
                left_hip: Point2D::new(0.5, y),
                left_knee: Point2D::new(0.5, y + 0.2),
                left_ankle: Point2D::new(0.5, y + 0.4),
            },
        })
    }

    #[test]
    fn missed_frames_leave_gaps_in_frame_index() {
        let mut source = CountingSource { remaining: 5 };
        let mut detector =
            ScriptedDetector::new(vec![pose(0.1), pose(0.2), None, pose(0.3), pose(0.4)]);

        let output = run_pipeline(&mut source, &mut detector).unwrap();

        assert_eq!(output.frames_seen, 5);
        assert_eq!(output.misses, 1);
        let indices: Vec<u64> = output.series.iter().map(|s| s.frame_index).collect();
        assert_eq!(indices, vec![0, 1, 3, 4]);
    }

    #[test]
    fn straight_leg_measures_180() {
        let mut source = CountingSource { remaining: 1 };
        let mut detector = ScriptedDetector::new(vec![pose(0.2)]);

        let output = run_pipeline(&mut source, &mut detector).unwrap();
        let sample = &output.series.samples()[0];
        assert!((sample.angle_degrees - 180.0).abs() < 1e-9);
    }

    #[test]
    fn empty_source_yields_empty_series() {
        let mut source = CountingSource { remaining: 0 };
        let mut detector = ScriptedDetector::new(vec![pose(0.1)]);

        let output = run_pipeline(&mut source, &mut detector).unwrap();
        assert!(output.series.is_empty());
        assert_eq!(output.frames_seen, 0);
        assert_eq!(output.misses, 0);
    }

    #[test]
    fn all_misses_still_count_frames() {
        let mut source = CountingSource { remaining: 3 };
        let mut detector = ScriptedDetector::new(vec![None, None, None]);

        let output = run_pipeline(&mut source, &mut detector).unwrap();
        assert!(output.series.is_empty());
        assert_eq!(output.frames_seen, 3);
        assert_eq!(output.misses, 3);
    }

    #[test]
    fn deterministic_detector_makes_runs_identical() {
        let script = vec![pose(0.1), None, pose(0.3), pose(0.25)];

        let mut first_source = CountingSource { remaining: 4 };
        let mut second_source = CountingSource { remaining: 4 };
        let first = run_pipeline(
            &mut first_source,
            &mut ScriptedDetector::new(script.clone()),
        )
        .unwrap();
        let second =
            run_pipeline(&mut second_source, &mut ScriptedDetector::new(script)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn unavailable_source_aborts_the_run() {
        let mut source = BrokenSource;
        let mut detector = ScriptedDetector::new(vec![pose(0.1)]);

        let err = run_pipeline(&mut source, &mut detector).unwrap_err();
        assert!(matches!(err, SourceError::Unavailable { .. }));
    }
}

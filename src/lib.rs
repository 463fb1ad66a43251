mod error;
mod export;
mod models;

pub mod detect;
pub mod pipeline;
pub mod video;

pub use error::{ExportError, ProcessError, SourceError};
pub use export::write_csv;
pub use models::{AngleSeries, JointAngleSample, Point2D, RunSummary};

use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;

use crate::detect::PoseDetector;
use crate::pipeline::run_pipeline;
use crate::video::FrameSource;

/// Runs the full select-process-save flow for one video: drive every frame
/// through the detector, then persist the series in a single write.
///
/// Fails with `ProcessError::Source` before any output exists, or with
/// `ProcessError::Export` after processing when the destination cannot be
/// written; in the export case the computed series is dropped, so callers
/// must not report success.
pub fn process_video(
    source: &mut dyn FrameSource,
    detector: &mut dyn PoseDetector,
    output_path: &Path,
) -> Result<RunSummary, ProcessError> {
    let started_at = Utc::now();

    let output = run_pipeline(source, detector)?;
    write_csv(&output.series, output_path)?;

    let summary = RunSummary {
        started_at,
        finished_at: Utc::now(),
        frames_seen: output.frames_seen,
        samples: output.series.len() as u64,
        misses: output.misses,
        output_path: output_path.to_path_buf(),
    };
    info!(
        "run complete: {} frames, {} samples ({:.0}% detected), saved to {}",
        summary.frames_seen,
        summary.samples,
        summary.detection_rate() * 100.0,
        summary.output_path.display()
    );
    Ok(summary)
}

/// Default CSV destination beside the input: `<stem>_pose_data.csv`.
pub fn default_output_path(video_path: &Path) -> PathBuf {
    let stem = video_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("video");
    video_path.with_file_name(format!("{stem}_pose_data.csv"))
}

//! Run-level bookkeeping reported back to the caller.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What one completed processing run did, for status display and logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Frames pulled from the source, whether or not they produced a sample.
    pub frames_seen: u64,
    /// Samples written to the series (and the exported file).
    pub samples: u64,
    /// Frames where the detector found no body.
    pub misses: u64,
    pub output_path: PathBuf,
}

impl RunSummary {
    /// Fraction of frames that produced a sample. 0.0 for an empty video.
    pub fn detection_rate(&self) -> f64 {
        if self.frames_seen == 0 {
            0.0
        } else {
            self.samples as f64 / self.frames_seen as f64
        }
    }
}

//! CSV export of a finished angle series.
//!
//! One write per run, after the pipeline completes; nothing is streamed while
//! frames are still being processed. An empty series still produces the
//! header row.

use std::path::Path;

use log::info;

use crate::error::ExportError;
use crate::models::{AngleSeries, Point2D};

/// Column order of the output file.
const HEADERS: [&str; 5] = [
    "frame_index",
    "left_hip",
    "left_knee",
    "left_ankle",
    "angle_degrees",
];

/// Writes the whole series to `path`: a header row, then one row per sample
/// in frame order. Coordinates are `x;y` pair literals; the angle keeps full
/// `f64` precision.
pub fn write_csv(series: &AngleSeries, path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path).map_err(|err| write_err(path, err))?;

    writer
        .write_record(HEADERS)
        .map_err(|err| write_err(path, err))?;

    for sample in series.iter() {
        writer
            .write_record([
                sample.frame_index.to_string(),
                pair_literal(sample.hip),
                pair_literal(sample.knee),
                pair_literal(sample.ankle),
                sample.angle_degrees.to_string(),
            ])
            .map_err(|err| write_err(path, err))?;
    }

    writer
        .flush()
        .map_err(|err| write_err(path, csv::Error::from(err)))?;

    info!("wrote {} rows to {}", series.len(), path.display());
    Ok(())
}

/// `x;y` with full precision, parseable back into the exact same floats.
fn pair_literal(point: Point2D) -> String {
    format!("{};{}", point.x, point.y)
}

fn write_err(path: &Path, source: csv::Error) -> ExportError {
    ExportError::Write {
        path: path.to_path_buf(),
        source,
    }
}

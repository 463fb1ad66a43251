//! Error types for a processing run.
//!
//! Per-frame detection misses are not errors (see `detect::Detection`), and
//! end-of-stream is the normal way a run finishes. Only two conditions are
//! fatal: the video source cannot be opened, or the finished series cannot be
//! saved. They carry distinct messages so a caller can tell "could not open
//! video" from "could not save results".

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a frame source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The video path is invalid or unreadable. Raised on open or first
    /// access, before any frame has been processed.
    #[error("could not open video source {path}: {message}")]
    Unavailable { path: PathBuf, message: String },
}

impl SourceError {
    pub fn unavailable(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Unavailable {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Errors raised while persisting a finished series.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be created or written. The computed series
    /// still exists in memory but was not persisted.
    #[error("could not save results to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Top-level failure classes for one run.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_message_names_the_path() {
        let err = SourceError::unavailable("clips/walk.mp4", "no such file");
        assert!(err.to_string().contains("could not open video source"));
        assert!(err.to_string().contains("clips/walk.mp4"));
    }

    #[test]
    fn process_error_keeps_the_distinct_messages() {
        let err = ProcessError::from(SourceError::unavailable("walk.mp4", "corrupt header"));
        assert!(err.to_string().contains("could not open video source"));
    }
}

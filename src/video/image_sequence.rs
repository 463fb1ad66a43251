//! Frame source backed by a directory of still images.
//!
//! Consumes frames that were already extracted from a container to numbered
//! image files (e.g. `frame_0000.png`). Files are served in lexicographic
//! order, so zero-padded names play back in decode order.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use super::{Frame, FrameSource};
use crate::error::SourceError;

const FRAME_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

#[derive(Debug)]
pub struct ImageSequenceSource {
    pending: Vec<PathBuf>,
    cursor: usize,
    ended: bool,
}

impl ImageSequenceSource {
    /// Opens a frame directory. An unreadable path fails here, before any
    /// frame is handed out; a directory with no image files is a valid empty
    /// stream.
    pub fn open(dir: &Path) -> Result<Self, SourceError> {
        let entries = fs::read_dir(dir)
            .map_err(|err| SourceError::unavailable(dir, err.to_string()))?;

        let mut pending: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| is_frame_file(path))
            .collect();
        pending.sort();

        Ok(Self {
            pending,
            cursor: 0,
            ended: false,
        })
    }

    /// Frames remaining in the stream.
    pub fn remaining(&self) -> usize {
        if self.ended {
            0
        } else {
            self.pending.len() - self.cursor
        }
    }
}

impl FrameSource for ImageSequenceSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, SourceError> {
        if self.ended || self.cursor >= self.pending.len() {
            return Ok(None);
        }

        let path = &self.pending[self.cursor];
        self.cursor += 1;

        match image::open(path) {
            Ok(img) => Ok(Some(img.to_rgb8())),
            Err(err) => {
                // A frame that stops decoding ends the stream, the same way a
                // reader stops at a truncated container.
                warn!(
                    "frame {} failed to decode, ending stream: {err}",
                    path.display()
                );
                self.ended = true;
                Ok(None)
            }
        }
    }
}

fn is_frame_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            FRAME_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

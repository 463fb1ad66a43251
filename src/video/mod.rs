//! Frame acquisition boundary.
//!
//! Container demuxing is an external concern; the pipeline only needs a lazy,
//! finite, forward-only stream of decoded frames in temporal order.

pub mod image_sequence;

pub use image_sequence::ImageSequenceSource;

use crate::error::SourceError;

/// One decoded video frame.
pub type Frame = image::RgbImage;

/// A forward-only stream of decoded frames.
///
/// `Ok(None)` is ordinary end-of-stream. Sources are consumed by exactly one
/// pipeline run and are not restartable mid-run.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, SourceError>;
}

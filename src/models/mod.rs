pub mod sample;
pub mod summary;

pub use sample::{AngleSeries, JointAngleSample, Point2D};
pub use summary::RunSummary;

pub mod angle;
pub mod runner;

pub use angle::knee_angle;
pub use runner::{run_pipeline, PipelineOutput};

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use gaitlog::detect::ScriptedDetector;
use gaitlog::video::ImageSequenceSource;

fn main() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (frames_dir, script_path, output) = match args.as_slice() {
        [frames, script] => (PathBuf::from(frames), PathBuf::from(script), None),
        [frames, script, output] => (
            PathBuf::from(frames),
            PathBuf::from(script),
            Some(PathBuf::from(output)),
        ),
        _ => bail!("usage: gaitlog <frames-dir> <landmark-script.json> [output.csv]"),
    };
    let output_path = output.unwrap_or_else(|| gaitlog::default_output_path(&frames_dir));

    let mut source = ImageSequenceSource::open(&frames_dir)?;
    let mut detector = ScriptedDetector::from_json_file(&script_path)
        .with_context(|| format!("could not load landmark script {}", script_path.display()))?;

    let summary = gaitlog::process_video(&mut source, &mut detector, &output_path)?;

    println!(
        "Processing complete: {} frames, {} samples ({:.0}% detected). Saved to {}",
        summary.frames_seen,
        summary.samples,
        summary.detection_rate() * 100.0,
        summary.output_path.display()
    );
    Ok(())
}

use std::time::{Duration, Instant};

use crate::codec;
use crate::config::Config;
use crate::engine::FilterEngine;
use crate::error::Result;

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub width: usize,
    pub height: usize,
    pub num_workers: usize,
    pub elapsed: Duration,
}

/// Decode, filter and encode according to `config`.
///
/// Any failure aborts before the output file is touched.
pub fn process(config: &Config) -> Result<RunSummary> {
    config.validate()?;
    let start = Instant::now();

    tracing::info!(path = %config.input_path.display(), "Loading image");
    let input = codec::decode(&config.input_path)?;

    let engine = FilterEngine::new(config.num_workers).with_border(config.border);
    let output = engine.run(&input)?;
    drop(input);

    tracing::info!(path = %config.output_path.display(), "Saving filtered image");
    codec::encode(&output, &config.output_path)?;

    let summary = RunSummary {
        width: output.width(),
        height: output.height(),
        num_workers: engine.num_workers(),
        elapsed: start.elapsed(),
    };
    tracing::info!(
        width = summary.width,
        height = summary.height,
        workers = summary.num_workers,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "Median filter applied"
    );

    Ok(summary)
}

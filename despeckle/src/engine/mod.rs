//! Parallel 3x3 median filter over row bands.
//!
//! The output buffer is split into one disjoint mutable slice per [`Band`],
//! and each slice is filled by exactly one task on a pool sized to the worker
//! count. Workers only read the shared input, so no locking is involved.


use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::band::{partition, Band};
use crate::error::{Error, Result};
use crate::median::reduce;
use crate::pixel::{Pixel, PixelBuffer};
use crate::window::sample;

/// Initial contents of the output buffer. The filter never writes the border
/// ring, so this decides what the border looks like afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderMode {
    /// Start from a buffer filled with this pixel.
    Fill(Pixel),
    /// Start from a copy of the input, so border pixels pass through.
    Copy,
}

impl Default for BorderMode {
    fn default() -> Self {
        Self::Fill(Pixel::BLACK)
    }
}

/// Cooperative cancellation flag shared between a caller and running workers.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone)]
pub struct FilterEngine {
    num_workers: usize,
    border: BorderMode,
    cancel: Option<CancelToken>,
}

impl FilterEngine {
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers,
            border: BorderMode::default(),
            cancel: None,
        }
    }

    pub fn with_border(mut self, border: BorderMode) -> Self {
        self.border = border;
        self
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Filter every interior pixel of `input` and return the new buffer.
    ///
    /// Blocks until all bands are done. The first worker error aborts the pass
    /// and no partial buffer is returned.
    pub fn run(&self, input: &PixelBuffer) -> Result<PixelBuffer> {
        let width = input.width();
        let height = input.height();
        let bands = partition(height, self.num_workers)?;

        let mut output = match self.border {
            BorderMode::Fill(value) => PixelBuffer::new_filled(width, height, value),
            BorderMode::Copy => input.clone(),
        };

        if width < 3 || height < 3 {
            tracing::debug!(width, height, "Image has no interior pixels, skipping filter");
            return Ok(output);
        }

        tracing::debug!(
            width,
            height,
            workers = self.num_workers,
            bands = bands.len(),
            "Running 3x3 median filter"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_workers)
            .thread_name(|i| format!("despeckle-band-{i}"))
            .build()?;

        let jobs = split_into_bands(output.pixels_mut(), width, &bands);
        let cancel = self.cancel.as_ref();

        pool.install(|| {
            jobs.into_par_iter()
                .try_for_each(|(band, rows)| filter_band(input, band, rows, cancel))
        })?;

        Ok(output)
    }
}

/// Filter `input` with `num_workers` bands and a black border.
pub fn median_filter_3x3(input: &PixelBuffer, num_workers: usize) -> Result<PixelBuffer> {
    FilterEngine::new(num_workers).run(input)
}

/// Carve `pixels` into one mutable slice per band, in band order.
fn split_into_bands<'a>(
    mut pixels: &'a mut [Pixel],
    width: usize,
    bands: &[Band],
) -> Vec<(Band, &'a mut [Pixel])> {
    let mut jobs = Vec::with_capacity(bands.len());
    for &band in bands {
        let (head, tail) = std::mem::take(&mut pixels).split_at_mut(band.len() * width);
        jobs.push((band, head));
        pixels = tail;
    }
    debug_assert!(pixels.is_empty(), "bands must cover every row");
    jobs
}

/// Fill the rows of one band. `rows` holds exactly the band's output rows.
fn filter_band(
    input: &PixelBuffer,
    band: Band,
    rows: &mut [Pixel],
    cancel: Option<&CancelToken>,
) -> Result<()> {
    let width = input.width();
    let height = input.height();
    tracing::trace!(start = band.start_row, end = band.end_row, "Filtering band");

    for y in band.rows() {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(Error::Cancelled);
        }
        // Top and bottom rows belong to the untouched border ring.
        if y == 0 || y == height - 1 {
            continue;
        }

        let local_y = y - band.start_row;
        let out_row = &mut rows[local_y * width..(local_y + 1) * width];
        for (x, out) in out_row.iter_mut().enumerate().take(width - 1).skip(1) {
            *out = reduce(&sample(input, x, y)?);
        }
    }

    Ok(())
}

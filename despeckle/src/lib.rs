//! Despeckle - parallel 3x3 median filtering of RGB images.
//!
//! The image is split into horizontal row bands, one per worker. Each worker
//! replaces every interior pixel of its band with the per-channel median of
//! its 3x3 neighbourhood. The one-pixel border ring is left untouched.
//!
//! ```rust,ignore
//! use despeckle::{codec, median_filter_3x3};
//!
//! let input = codec::decode("noisy.png".as_ref())?;
//! let output = median_filter_3x3(&input, 4)?;
//! codec::encode(&output, "clean.png".as_ref())?;
//! ```

pub mod band;
pub mod codec;
pub mod config;
pub mod engine;
mod error;
pub mod median;
mod pipeline;
pub mod pixel;
pub mod window;

pub use band::{partition, Band};
pub use config::Config;
pub use engine::{median_filter_3x3, BorderMode, CancelToken, FilterEngine};
pub use error::{Error, Result};
pub use median::reduce;
pub use pipeline::{process, RunSummary};
pub use pixel::{Pixel, PixelBuffer};
pub use window::{sample, Window};

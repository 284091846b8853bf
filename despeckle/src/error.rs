use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading, filtering or saving an image.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to open '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode image '{path}': {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Image '{path}' has no pixels")]
    EmptyImage { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("3x3 window centred at ({x}, {y}) falls outside the {width}x{height} buffer")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Filter pass was cancelled")]
    Cancelled,

    #[error("Failed to load config '{path}': {source}")]
    Config {
        path: PathBuf,
        source: common::SerdeFormatError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

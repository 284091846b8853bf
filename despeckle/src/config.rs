//! Run configuration: which file to read, where to write, and how many workers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::BorderMode;
use crate::error::{Error, Result};

pub const DEFAULT_INPUT_PATH: &str = "foto_trabalho.png";
pub const DEFAULT_OUTPUT_PATH: &str = "imagem_filtrada.png";
pub const DEFAULT_NUM_WORKERS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Image to filter.
    pub input_path: PathBuf,
    /// Where the filtered image is written. The extension picks the format.
    pub output_path: PathBuf,
    /// Number of row bands, and threads, used for the pass.
    pub num_workers: usize,
    /// What the untouched border ring of the output contains.
    pub border: BorderMode,
    /// Default tracing filter; `RUST_LOG` overrides it.
    pub log_level: String,
    /// Directory for rolling log files. Console only when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            num_workers: DEFAULT_NUM_WORKERS,
            border: BorderMode::default(),
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Load a YAML or JSON config; missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        common::serde_format::load_file(path).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks that do not depend on the image. Worker count versus image
    /// height is checked once the image is decoded.
    pub fn validate(&self) -> Result<()> {
        if self.num_workers == 0 {
            return Err(Error::InvalidConfiguration(
                "num_workers must be at least 1".to_string(),
            ));
        }
        if self.input_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfiguration(
                "input_path must not be empty".to_string(),
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfiguration(
                "output_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

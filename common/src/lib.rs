pub mod file_format;
pub mod log_setup;
pub mod serde_format;
pub mod test_utils;

pub use file_format::{FileExtensionError, FileFormat};
pub use serde_format::{SerdeFormatError, SerdeFormatResult};

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::file_format::{FileExtensionError, FileFormat};

#[derive(Debug, thiserror::Error)]
pub enum SerdeFormatError {
    #[error("Failed to read file")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Extension(#[from] FileExtensionError),
    #[error("YAML serialization failed")]
    Yaml(#[from] serde_yml::Error),
    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),
}

pub type SerdeFormatResult<T> = Result<T, SerdeFormatError>;

pub fn serialize<T: Serialize>(value: &T, format: FileFormat) -> SerdeFormatResult<String> {
    let mut text = match format {
        FileFormat::Yaml => serde_yml::to_string(value)?,
        FileFormat::Json => serde_json::to_string_pretty(value)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

pub fn deserialize<T: DeserializeOwned>(
    serialized: &str,
    format: FileFormat,
) -> SerdeFormatResult<T> {
    match format {
        FileFormat::Yaml => Ok(serde_yml::from_str(serialized)?),
        FileFormat::Json => Ok(serde_json::from_str(serialized)?),
    }
}

/// Reads `path` and deserializes it using the format implied by its extension.
pub fn load_file<T: DeserializeOwned>(path: &Path) -> SerdeFormatResult<T> {
    let format = FileFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)?;
    deserialize(&text, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Settings {
        name: String,
        count: u32,
    }

    #[test]
    fn test_yaml_and_json_read_back_what_they_write() {
        let settings = Settings {
            name: "band".to_string(),
            count: 3,
        };
        for format in [FileFormat::Yaml, FileFormat::Json] {
            let text = serialize(&settings, format).unwrap();
            assert!(text.ends_with('\n'));
            let parsed: Settings = deserialize(&text, format).unwrap();
            assert_eq!(parsed, settings);
        }
    }

    #[test]
    fn test_load_file_reports_missing_file() {
        let result: SerdeFormatResult<Settings> =
            load_file(Path::new("does/not/exist/settings.yaml"));
        assert!(matches!(result, Err(SerdeFormatError::Io(_))));
    }

    #[test]
    fn test_load_file_rejects_unknown_extension_before_reading() {
        let result: SerdeFormatResult<Settings> = load_file(Path::new("settings.ini"));
        assert!(matches!(result, Err(SerdeFormatError::Extension(_))));
    }
}

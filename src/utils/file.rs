// JSON input loading

use crate::error::{AssertifyError, Result};
use serde_json::Value;
use std::path::Path;

/// File utilities for reading assertion inputs
pub struct FileUtils;

impl FileUtils {
    /// Read and parse a JSON file
    pub fn read_json(path: &Path) -> Result<Value> {
        let content = std::fs::read_to_string(path).map_err(|source| AssertifyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_json(&content, &path.display().to_string())
    }

    /// Parse JSON text; `origin` names the input in error messages
    pub fn parse_json(text: &str, origin: &str) -> Result<Value> {
        serde_json::from_str(text).map_err(|source| AssertifyError::Json {
            origin: origin.to_string(),
            source,
        })
    }

    /// Load an input either as inline JSON text or from a file path
    pub fn load_value(input: &str, inline: bool, origin: &str) -> Result<Value> {
        if inline {
            Self::parse_json(input, origin)
        } else {
            Self::read_json(Path::new(input))
        }
    }
}

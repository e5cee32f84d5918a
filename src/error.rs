// Library error type

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssertifyError {
    /// A failed assertion escalated by the caller; carries the rendered report
    #[error("assertion failed{}", .mismatch.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    AssertionFailed {
        report: String,
        mismatch: Option<String>,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, AssertifyError>;

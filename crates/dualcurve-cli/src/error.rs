//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

use dualcurve_core::CoreError;
use dualcurve_curves::CurveError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Market data file could not be read.
    #[error("Cannot read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Market data file is malformed.
    #[error("Invalid market data: {0}")]
    Parse(String),

    /// File extension is neither `.toml` nor `.json`.
    #[error("Unsupported file format: {0}. Use .toml or .json.")]
    UnsupportedFormat(String),

    /// Date arithmetic failed.
    #[error("Date error: {0}")]
    Date(#[from] CoreError),

    /// Curve construction or stripping failed.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

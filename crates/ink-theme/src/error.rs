//! Error types for loading and writing theme files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a style tree or writing a theme family.
///
/// Every variant carries the path involved so the message stands on its
/// own when printed at the top of the binary.
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but its top level is not an object.
    #[error("{} must contain a JSON object at the top level", path.display())]
    NotAnObject { path: PathBuf },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize theme family: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ThemeError>;

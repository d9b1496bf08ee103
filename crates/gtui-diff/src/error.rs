//! Error types for the gtui-diff crate

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced around the diff engine.
///
/// The engine functions themselves are total; these errors come from the
/// content sources that feed them and from loading configuration.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The content source could not supply old or new content for a path
    #[error("content unavailable for {path:?}: {source}")]
    ContentUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO operation failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid config at {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl EngineError {
    /// Wrap an IO failure from a content source for the given path
    pub fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EngineError::ContentUnavailable {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

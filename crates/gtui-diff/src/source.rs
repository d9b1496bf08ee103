//! Content sources feeding the diff engine
//!
//! The engine never reads files or repositories itself. Callers implement
//! [`ContentSource`] over their version-control backend and working tree,
//! and [`diff_path`] turns what it supplies into a [`DiffResult`].

use crate::diff::{diff_file, DiffResult};
use crate::error::{EngineError, EngineResult};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Supplies the two versions of a file
pub trait ContentSource {
    /// Last committed content of `path`
    ///
    /// `Ok(None)` means the file is untracked or absent from the last
    /// commit, and is diffed as a new file.
    fn base_content(&self, path: &Path) -> EngineResult<Option<Vec<u8>>>;

    /// Current working-tree content of `path`
    fn current_content(&self, path: &Path) -> EngineResult<Vec<u8>>;
}

/// Diff a single path using the given source
///
/// # Errors
///
/// Returns whatever the source reports when it cannot supply content;
/// nothing is retried or recovered here.
pub fn diff_path<S: ContentSource + ?Sized>(source: &S, path: &Path) -> EngineResult<DiffResult> {
    let base = source.base_content(path)?;
    let current = source.current_content(path)?;

    tracing::debug!(
        "Diffing {:?} ({} -> {} bytes{})",
        path,
        base.as_ref().map_or(0, Vec::len),
        current.len(),
        if base.is_none() { ", new file" } else { "" }
    );

    Ok(diff_file(path, base.as_deref(), &current))
}

/// In-memory content source
///
/// Useful when the caller already holds both buffers, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    base: HashMap<PathBuf, Vec<u8>>,
    current: HashMap<PathBuf, Vec<u8>>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        MemorySource::default()
    }

    /// Set the committed content of a path
    pub fn with_base(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.base.insert(path.into(), content.into());
        self
    }

    /// Set the working-tree content of a path
    pub fn with_current(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.current.insert(path.into(), content.into());
        self
    }
}

impl ContentSource for MemorySource {
    fn base_content(&self, path: &Path) -> EngineResult<Option<Vec<u8>>> {
        Ok(self.base.get(path).cloned())
    }

    fn current_content(&self, path: &Path) -> EngineResult<Vec<u8>> {
        self.current.get(path).cloned().ok_or_else(|| {
            EngineError::unavailable(
                path,
                io::Error::new(io::ErrorKind::NotFound, "no working-tree content"),
            )
        })
    }
}

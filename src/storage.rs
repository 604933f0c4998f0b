//! Filesystem primitives used by the orchestrator.
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub trait Storage {
    fn exists(&self, path: &Path) -> bool;

    /// Creates `path` and any missing ancestors. Existing directories are not an error.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Creates or truncates `path` and writes `content` to it.
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}

/// [`Storage`] over the local filesystem.
#[derive(Debug, Default)]
pub struct FileSystemStorage;

impl FileSystemStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for FileSystemStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(Error::IoError)
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(Error::IoError)
    }
}

use std::path::{Path, PathBuf};

use eyre::Result;

/// Write `content` to `path`, creating parent directories as needed.
///
/// Existing files are overwritten unconditionally; the directory creation is
/// idempotent, so repeated writes to the same path are safe.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// A generated file ready to be persisted.
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file to disk, replacing any previous version.
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content)
    }
}

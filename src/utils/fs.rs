//! File system utility functions
//!
//! Provides the file operations the store needs with proper error handling.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug, Clone, Copy)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Read file contents as string, returning `None` when the file does not exist
    #[instrument(skip(self))]
    pub fn read_file_if_exists<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
    ) -> io::Result<Option<String>> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(contents) => {
                debug!("Read {} bytes from {}", contents.len(), path.display());
                Ok(Some(contents))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("File does not exist: {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Replace a file's contents atomically.
    ///
    /// The data lands in a temporary file next to the target and is then
    /// renamed over it, so readers observe either the old or the new contents.
    #[instrument(skip(self, contents))]
    pub fn write_file_atomic<P: AsRef<Path> + std::fmt::Debug, C: AsRef<[u8]>>(
        &self,
        path: P,
        contents: C,
    ) -> io::Result<()> {
        let path = path.as_ref();
        let dir = Self::parent_dir(path);

        self.create_dir_all(&dir)?;

        let mut temp = NamedTempFile::new_in(&dir)?;
        temp.write_all(contents.as_ref())?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;

        debug!("File written successfully: {}", path.display());
        Ok(())
    }

    /// Create directories recursively
    #[instrument(skip(self))]
    pub fn create_dir_all<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        debug!("Creating directory: {}", path.display());
        fs::create_dir_all(path)
    }

    /// Check if a path exists and is a directory
    pub fn is_dir<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_dir()
    }

    // A bare file name has an empty parent; that means the working directory.
    fn parent_dir(path: &Path) -> PathBuf {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}

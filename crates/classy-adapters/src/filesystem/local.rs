//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use classy_core::{application::ports::Filesystem, error::ClassyResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    /// `std::fs::rename`: atomic within one filesystem, replaces `to`.
    fn rename(&self, from: &Path, to: &Path) -> ClassyResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "rename file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> classy_core::error::ClassyError {
    use classy_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use classy_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ClassyError, ClassyResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle while the scaffold
/// service owns another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

fn poisoned() -> ClassyError {
    ClassyError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Create a directory and all parent directories.
    pub fn create_dir_all(&self, path: &Path) {
        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Write a file, creating its parent directories.
    pub fn write_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent);
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
    }

    /// Whether a file or directory exists at `path`.
    pub fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn rename(&self, from: &Path, to: &Path) -> ClassyResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        // Destination parent must exist
        if let Some(parent) = to.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: to.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        let content = inner.files.remove(from).ok_or_else(|| {
            ClassyError::from(ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "No such file or directory".into(),
            })
        })?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }
}

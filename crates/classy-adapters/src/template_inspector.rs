//! Template directory inspection.
//!
//! Walks the configured app and project template directories so the CLI can
//! show what the generator will be fed. Template contents stay opaque: only
//! relative file paths are reported.
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── app_template/
//! │   ├── __init__.py-tpl
//! │   └── ...
//! └── project_template/
//!     ├── manage.py-tpl
//!     ├── secrets.py          ← renamed to .env after generation
//!     ├── gitignore.py        ← renamed to .gitignore
//!     └── requirements.py     ← renamed to requirements.txt
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use classy_core::{
    application::ApplicationError,
    domain::{TemplateDirs, TemplateKind},
    error::ClassyResult,
};

/// One template directory and the files below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateListing {
    pub kind: TemplateKind,
    pub root: PathBuf,
    pub exists: bool,
    /// Paths relative to `root`, sorted.
    pub files: Vec<PathBuf>,
}

/// Inspect both template directories, app first.
///
/// A missing directory is reported with `exists: false` rather than as an
/// error; unreadable entries below an existing directory are errors.
#[instrument(skip_all)]
pub fn inspect(dirs: &TemplateDirs) -> ClassyResult<Vec<TemplateListing>> {
    dirs.iter()
        .map(|(kind, root)| {
            let exists = root.is_dir();
            let files = if exists { list_files(root)? } else { Vec::new() };
            debug!(
                %kind,
                root = %root.display(),
                exists,
                files = files.len(),
                "Inspected template directory"
            );
            Ok(TemplateListing {
                kind,
                root: root.to_path_buf(),
                exists,
                files,
            })
        })
        .collect()
}

fn list_files(root: &Path) -> ClassyResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| ApplicationError::FilesystemError {
            path: e.path().unwrap_or(root).to_path_buf(),
            reason: format!("Failed to read template directory: {e}"),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(root) {
            files.push(relative.to_path_buf());
        }
    }

    Ok(files)
}

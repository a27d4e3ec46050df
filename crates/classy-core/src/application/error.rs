//! Application layer errors.
//!
//! These errors represent failures reaching the outside world (the generator
//! process and the filesystem), not invalid input. Input errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the generator or renaming files.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The generator could not be started at all.
    #[error("Failed to start `{command}`: {reason}")]
    ProcessSpawn { command: String, reason: String },

    /// The generator ran and exited unsuccessfully.
    #[error("`{command}` exited with {}", exit_status(.code))]
    ProcessFailed { command: String, code: Option<i32> },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A configured template directory does not exist.
    #[error("The {kind} template directory does not exist: {path}")]
    TemplateDirMissing { kind: &'static str, path: PathBuf },
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProcessSpawn { command, .. } => vec![
                format!("Could not run: {}", command),
                "Ensure Django is installed and django-admin is on your PATH".into(),
                "Try: pip install django".into(),
            ],
            Self::ProcessFailed { .. } => vec![
                "The generator reported an error; see its output above".into(),
                "Check that the name is a valid Python identifier".into(),
                "Check that the destination directory exists".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the generated project contains the template file".into(),
                "Check that you have write permissions".into(),
            ],
            Self::TemplateDirMissing { path, .. } => vec![
                format!("Expected a template directory at {}", path.display()),
                "Point --templates-dir at the directory holding app_template/ and project_template/"
                    .into(),
                "Or set templates.root in the config file".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProcessSpawn { .. } | Self::ProcessFailed { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::TemplateDirMissing { .. } => ErrorCategory::NotFound,
        }
    }
}

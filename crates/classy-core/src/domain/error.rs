// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (errors cross the port boundary by value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid {kind} name '{name}': {reason}")]
    InvalidName {
        kind: &'static str,
        name: String,
        reason: String,
    },

    #[error("Path escapes its base directory: {path}")]
    PathEscapesBase { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { kind, name, reason } => vec![
                format!("The {} name '{}' is invalid: {}", kind, name, reason),
                "Use a valid Python identifier, e.g. blog, accounts, my_site".into(),
                "Do not include path separators; pass the destination separately".into(),
            ],
            Self::PathEscapesBase { path } => vec![
                format!("'{}' must be a plain file name", path),
                "Absolute paths and '..' components are not allowed".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::PathEscapesBase { .. } => ErrorCategory::Validation,
        }
    }
}

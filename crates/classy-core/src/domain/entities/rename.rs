use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::error::DomainError;

/// One template-name → runtime-name rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenamePair {
    pub source: &'static str,
    pub destination: &'static str,
}

/// Renames applied after project generation, in order.
pub const RENAME_MAPPING: &[RenamePair] = &[
    RenamePair {
        source: "secrets.py",
        destination: ".env",
    },
    RenamePair {
        source: "gitignore.py",
        destination: ".gitignore",
    },
    RenamePair {
        source: "requirements.py",
        destination: "requirements.txt",
    },
];

/// A rename with both sides resolved against a base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRename {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl ResolvedRename {
    /// Join `source` and `destination` onto `base`.
    ///
    /// Both names must stay inside `base`: absolute paths and `..`
    /// components are rejected.
    pub fn resolve(source: &str, destination: &str, base: &Path) -> Result<Self, DomainError> {
        Ok(Self {
            from: base.join(contained(source)?),
            to: base.join(contained(destination)?),
        })
    }
}

fn contained(name: &str) -> Result<&Path, DomainError> {
    let path = Path::new(name);
    let escapes = name.is_empty()
        || path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(DomainError::PathEscapesBase { path: name.into() });
    }
    Ok(path)
}

/// Resolve the whole [`RENAME_MAPPING`] against `base`.
pub fn plan_renames(base: &Path) -> Result<Vec<ResolvedRename>, DomainError> {
    RENAME_MAPPING
        .iter()
        .map(|pair| ResolvedRename::resolve(pair.source, pair.destination, base))
        .collect()
}

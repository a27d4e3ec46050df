use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::TemplateKind;

/// The two template directories handed to the generator.
///
/// Resolved once at startup and injected into the scaffold service; nothing
/// in the core reads template locations from ambient process state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDirs {
    app: PathBuf,
    project: PathBuf,
}

impl TemplateDirs {
    pub fn new(app: impl Into<PathBuf>, project: impl Into<PathBuf>) -> Self {
        Self {
            app: app.into(),
            project: project.into(),
        }
    }

    /// Derive both directories from a shared templates root:
    /// `<root>/app_template` and `<root>/project_template`.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            app: root.join(TemplateKind::App.dir_name()),
            project: root.join(TemplateKind::Project.dir_name()),
        }
    }

    pub fn app(&self) -> &Path {
        &self.app
    }

    pub fn project(&self) -> &Path {
        &self.project
    }

    pub fn get(&self, kind: TemplateKind) -> &Path {
        match kind {
            TemplateKind::App => &self.app,
            TemplateKind::Project => &self.project,
        }
    }

    /// Both directories paired with their kind, app first.
    pub fn iter(&self) -> impl Iterator<Item = (TemplateKind, &Path)> {
        [
            (TemplateKind::App, self.app.as_path()),
            (TemplateKind::Project, self.project.as_path()),
        ]
        .into_iter()
    }
}

//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core calls and render results.
//! No scaffolding rules live here.

pub mod app;
pub mod completions;
pub mod config;
pub mod init;
pub mod project;
pub mod templates;

use classy_adapters::{LocalFilesystem, SystemProcessRunner};
use classy_core::{
    application::{ApplicationError, ScaffoldService},
    domain::{TemplateDirs, TemplateKind},
    error::ClassyError,
};

use crate::{config::AppConfig, error::CliResult};

/// Wire the production adapters into a [`ScaffoldService`].
fn scaffold_service(templates: TemplateDirs, config: &AppConfig) -> ScaffoldService {
    ScaffoldService::new(
        templates,
        Box::new(SystemProcessRunner::new()),
        Box::new(LocalFilesystem::new()),
    )
    .with_program(config.generator.program.as_str())
}

/// `django-admin` answers a missing template directory with a traceback;
/// report it before spawning.
fn ensure_template_dir(templates: &TemplateDirs, kind: TemplateKind) -> CliResult<()> {
    let path = templates.get(kind);
    if path.is_dir() {
        return Ok(());
    }
    Err(ClassyError::from(ApplicationError::TemplateDirMissing {
        kind: kind.as_str(),
        path: path.to_path_buf(),
    })
    .into())
}

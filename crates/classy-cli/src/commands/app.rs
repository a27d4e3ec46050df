//! Implementation of the `classy-start app` command.

use serde::Serialize;
use tracing::{info, instrument};

use classy_core::{
    domain::{AppName, GeneratorCommand, TemplateKind},
    error::ClassyError,
};

use crate::{
    cli::{AppArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// JSON shape of an `app` run.
#[derive(Debug, Serialize)]
struct AppReport<'a> {
    app: &'a AppName,
    command: GeneratorCommand,
    dry_run: bool,
}

/// Execute the `classy-start app` command.
#[instrument(skip_all, fields(app = %args.name))]
pub fn execute(
    args: AppArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let name = AppName::new(args.name).map_err(ClassyError::from)?;
    let templates = config.template_dirs(global.templates_dir.as_deref());
    let service = super::scaffold_service(templates.clone(), config);
    let command = service.app_command(&name);

    if args.dry_run {
        output.info(&format!("Dry run: would run {command}"))?;
    } else {
        super::ensure_template_dir(&templates, TemplateKind::App)?;

        output.header(&format!("Creating app '{name}'..."))?;
        service.start_app(&name)?;
        info!(app = %name, "App created");
        output.success(&format!("App '{name}' created"))?;
        output.print(&format!(
            "  Add '{name}' to INSTALLED_APPS in your settings module."
        ))?;
    }

    if output.is_json() {
        output.json(&AppReport {
            app: &name,
            command,
            dry_run: args.dry_run,
        })?;
    }

    Ok(())
}

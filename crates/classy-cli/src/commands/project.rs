//! Implementation of the `classy-start project` command.
//!
//! Runs the generator into DIRECTORY and then renames the template-named
//! files there.  `--skip-rename` stops after the generator; `--dry-run`
//! only describes both steps.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use classy_core::{
    application::ProjectPlan,
    domain::{ProjectName, ResolvedRename, TemplateKind},
    error::ClassyError,
};

use crate::{
    cli::{GlobalArgs, ProjectArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// JSON shape of a `project` run.
#[derive(Debug, Serialize)]
struct ProjectReport<'a> {
    project: &'a ProjectName,
    destination: &'a Path,
    #[serde(flatten)]
    plan: ProjectPlan,
    dry_run: bool,
}

/// Execute the `classy-start project` command.
///
/// Sequence:
/// 1. Validate the project name
/// 2. Plan the generator command and the renames
/// 3. Early-exit if `--dry-run`
/// 4. Check the destination and the project template directory exist
/// 5. Generate, then rename unless `--skip-rename`
#[instrument(
    skip_all,
    fields(project = %args.name, destination = %args.directory.display())
)]
pub fn execute(
    args: ProjectArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let name = ProjectName::new(args.name).map_err(ClassyError::from)?;
    let destination = args.directory;
    let templates = config.template_dirs(global.templates_dir.as_deref());
    let service = super::scaffold_service(templates.clone(), config);

    let mut plan = service.plan_project(&name, &destination)?;
    if args.skip_rename {
        plan.renames.clear();
    }
    debug!(command = %plan.command, renames = plan.renames.len(), "Project planned");

    if args.dry_run {
        show_plan(&plan, output)?;
    } else {
        ensure_destination(&destination)?;
        super::ensure_template_dir(&templates, TemplateKind::Project)?;

        output.header(&format!("Creating project '{name}'..."))?;
        if args.skip_rename {
            service.generate_project(&name, &destination)?;
        } else {
            service.start_project(&name, &destination)?;
        }
        info!(project = %name, "Project created");

        output.success(&format!("Project '{name}' created"))?;
        show_next_steps(&destination, args.skip_rename, output)?;
    }

    if output.is_json() {
        output.json(&ProjectReport {
            project: &name,
            destination: &destination,
            plan,
            dry_run: args.dry_run,
        })?;
    }

    Ok(())
}

/// The generator refuses a destination that does not exist; say so before
/// spawning it.
fn ensure_destination(destination: &Path) -> CliResult<()> {
    if destination.is_dir() {
        return Ok(());
    }
    let reason = if destination.exists() {
        "not a directory"
    } else {
        "directory does not exist"
    };
    Err(CliError::InvalidDestination {
        path: destination.to_path_buf(),
        reason: reason.into(),
    })
}

fn show_plan(plan: &ProjectPlan, output: &OutputManager) -> CliResult<()> {
    output.info(&format!("Dry run: would run {}", plan.command))?;
    for ResolvedRename { from, to } in &plan.renames {
        output.info(&format!(
            "Dry run: would rename {} -> {}",
            from.display(),
            to.display()
        ))?;
    }
    Ok(())
}

fn show_next_steps(
    destination: &Path,
    skipped_rename: bool,
    output: &OutputManager,
) -> CliResult<()> {
    output.print("")?;
    output.print("Next steps:")?;
    if destination != Path::new(".") {
        output.print(&format!("  cd {}", destination.display()))?;
    }
    let requirements = if skipped_rename {
        "requirements.py"
    } else {
        "requirements.txt"
    };
    output.print(&format!("  pip install -r {requirements}"))?;
    output.print("  python manage.py migrate")?;
    Ok(())
}

//! Implementation of the `classy-start templates` command.

use tracing::instrument;

use classy_adapters::inspect;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Show the resolved template directories and the files they contain.
///
/// A missing directory is a warning here, not an error: this command is how
/// users find out where the templates are expected.
#[instrument(skip_all)]
pub fn execute(global: &GlobalArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let dirs = config.template_dirs(global.templates_dir.as_deref());
    let listings = inspect(&dirs)?;

    if output.is_json() {
        return output.json(&listings);
    }

    output.header("Template directories:")?;
    output.print(&format!("  generator: {}", config.generator.program))?;

    for listing in &listings {
        output.print("")?;
        output.print(&format!("  {} ({})", listing.kind, listing.root.display()))?;

        if !listing.exists {
            output.warning(&format!(
                "    {} does not exist",
                listing.kind.dir_name()
            ))?;
            continue;
        }
        if listing.files.is_empty() {
            output.print("    (empty)")?;
        }
        for file in &listing.files {
            output.print(&format!("    {}", file.display()))?;
        }
    }

    Ok(())
}

//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Build the generator command for an app or project
//! 2. Run it through the process port
//! 3. For projects, rename the template-named files to their runtime names
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, ProcessRunner},
    domain::{
        AppName, DEFAULT_GENERATOR, GeneratorCommand, ProjectName, RENAME_MAPPING,
        ResolvedRename, TemplateDirs, plan_renames,
    },
    error::ClassyResult,
};

/// Everything `start_project` would do, without doing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPlan {
    pub command: GeneratorCommand,
    pub renames: Vec<ResolvedRename>,
}

/// Main scaffolding service.
///
/// Holds the injected template directories and the two driven ports. Every
/// operation is a blocking, one-shot sequence: no retries, no rollback.
pub struct ScaffoldService {
    templates: TemplateDirs,
    program: String,
    runner: Box<dyn ProcessRunner>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// The generator defaults to `django-admin`; see [`Self::with_program`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use classy_core::application::{ScaffoldService, ports::*};
    ///
    /// let service = ScaffoldService::new(
    ///     templates,  // TemplateDirs
    ///     runner,     // impl ProcessRunner
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        templates: TemplateDirs,
        runner: Box<dyn ProcessRunner>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            templates,
            program: DEFAULT_GENERATOR.to_owned(),
            runner,
            filesystem,
        }
    }

    /// Use a different generator executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    // -------------------------------------------------------------------------
    // Command construction
    // -------------------------------------------------------------------------

    /// `django-admin startapp <name> --template <app-dir>`
    pub fn app_command(&self, name: &AppName) -> GeneratorCommand {
        GeneratorCommand::start_app(&self.program, name, self.templates.app())
    }

    /// `django-admin startproject <name> <destination> --template <project-dir>`
    pub fn project_command(&self, name: &ProjectName, destination: &Path) -> GeneratorCommand {
        GeneratorCommand::start_project(&self.program, name, destination, self.templates.project())
    }

    /// Describe a full `start_project` run for dry runs.
    pub fn plan_project(
        &self,
        name: &ProjectName,
        destination: &Path,
    ) -> ClassyResult<ProjectPlan> {
        Ok(ProjectPlan {
            command: self.project_command(name, destination),
            renames: plan_renames(&follow_up_base_dir(name, Some(destination)))?,
        })
    }

    // -------------------------------------------------------------------------
    // Use cases
    // -------------------------------------------------------------------------

    /// Create a new app inside the current project.
    #[instrument(skip_all, fields(app = %name))]
    pub fn start_app(&self, name: &AppName) -> ClassyResult<()> {
        let command = self.app_command(name);
        info!(command = %command, "Starting app");
        self.runner.run(&command)?;

        info!("App created");
        Ok(())
    }

    /// Create a new project, then apply the follow-up renames.
    ///
    /// The renames only run when the generator succeeded.
    #[instrument(
        skip_all,
        fields(project = %name, destination = %destination.display())
    )]
    pub fn start_project(&self, name: &ProjectName, destination: &Path) -> ClassyResult<()> {
        self.generate_project(name, destination)?;
        self.follow_up_start_project(name, Some(destination))
    }

    /// Run only the generator step of [`Self::start_project`].
    pub fn generate_project(&self, name: &ProjectName, destination: &Path) -> ClassyResult<()> {
        let command = self.project_command(name, destination);
        info!(command = %command, "Starting project");
        self.runner.run(&command)?;

        info!("Project generated");
        Ok(())
    }

    /// Rename the template-named files of a freshly generated project.
    ///
    /// `directory` is the base directory; without one, the project name is
    /// used as a relative path (where the generator puts a project started
    /// without a destination). The first failing rename stops the sequence.
    #[instrument(skip_all, fields(project = %name))]
    pub fn follow_up_start_project(
        &self,
        name: &ProjectName,
        directory: Option<&Path>,
    ) -> ClassyResult<()> {
        let base_dir = follow_up_base_dir(name, directory);
        debug!(base_dir = %base_dir.display(), "Applying follow-up renames");

        for pair in RENAME_MAPPING {
            self.rename_file(pair.source, pair.destination, &base_dir)?;
        }

        info!("Follow-up renames applied");
        Ok(())
    }

    /// Rename `base_dir/source` to `base_dir/destination`.
    pub fn rename_file(
        &self,
        source: &str,
        destination: &str,
        base_dir: &Path,
    ) -> ClassyResult<()> {
        let rename = ResolvedRename::resolve(source, destination, base_dir)?;
        debug!(
            from = %rename.from.display(),
            to = %rename.to.display(),
            "Renaming"
        );
        self.filesystem.rename(&rename.from, &rename.to)
    }
}

/// Base directory for the follow-up renames.
pub fn follow_up_base_dir(name: &ProjectName, directory: Option<&Path>) -> PathBuf {
    directory
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(name.as_str()))
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{MockFilesystem, MockProcessRunner};
    use crate::domain::DomainError;
    use crate::error::ClassyError;

    const APP_DIR: &str = "/opt/classy/templates/app_template";
    const PROJECT_DIR: &str = "/opt/classy/templates/project_template";

    fn templates() -> TemplateDirs {
        TemplateDirs::new(APP_DIR, PROJECT_DIR)
    }

    fn project(name: &str) -> ProjectName {
        ProjectName::new(name).unwrap()
    }

    /// Expect the three follow-up renames, in order, rooted at `base`.
    fn expect_renames(fs: &mut MockFilesystem, base: &Path) {
        let mut seq = Sequence::new();
        for (source, destination) in [
            ("secrets.py", ".env"),
            ("gitignore.py", ".gitignore"),
            ("requirements.py", "requirements.txt"),
        ] {
            let (from, to) = (base.join(source), base.join(destination));
            fs.expect_rename()
                .withf(move |f, t| f.to_path_buf() == from && t.to_path_buf() == to)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }
    }

    fn failed(command: &str) -> ClassyError {
        ApplicationError::ProcessFailed {
            command: command.into(),
            code: Some(1),
        }
        .into()
    }

    // ── start_app ─────────────────────────────────────────────────────────

    #[test]
    fn start_app_runs_startapp_once_with_app_template() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|cmd| {
                cmd.argv() == ["django-admin", "startapp", "appify", "--template", APP_DIR]
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut fs = MockFilesystem::new();
        fs.expect_rename().times(0);

        let service = ScaffoldService::new(templates(), Box::new(runner), Box::new(fs));
        service.start_app(&AppName::new("appify").unwrap()).unwrap();
    }

    #[test]
    fn start_app_propagates_process_failure() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|cmd| Err(failed(&cmd.to_string())));

        let service =
            ScaffoldService::new(templates(), Box::new(runner), Box::new(MockFilesystem::new()));
        let err = service.start_app(&AppName::new("appify").unwrap()).unwrap_err();
        assert!(matches!(
            err,
            ClassyError::Application(ApplicationError::ProcessFailed { .. })
        ));
    }

    #[test]
    fn start_app_uses_configured_program() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|cmd| cmd.program() == "/venv/bin/django-admin")
            .times(1)
            .returning(|_| Ok(()));

        let service =
            ScaffoldService::new(templates(), Box::new(runner), Box::new(MockFilesystem::new()))
                .with_program("/venv/bin/django-admin");
        service.start_app(&AppName::new("blog").unwrap()).unwrap();
    }

    #[test]
    fn start_app_leaves_template_dirs_to_the_generator() {
        // No filesystem expectations: any lookup of the template directory panics.
        let mut runner = MockProcessRunner::new();
        runner.expect_run().times(1).returning(|_| Ok(()));

        let service =
            ScaffoldService::new(templates(), Box::new(runner), Box::new(MockFilesystem::new()));
        service.start_app(&AppName::new("appify").unwrap()).unwrap();
    }

    // ── start_project ─────────────────────────────────────────────────────

    #[test]
    fn start_project_runs_startproject_then_renames_in_destination() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|cmd| {
                cmd.argv()
                    == [
                        "django-admin",
                        "startproject",
                        "projectible",
                        ".",
                        "--template",
                        PROJECT_DIR,
                    ]
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut fs = MockFilesystem::new();
        expect_renames(&mut fs, Path::new("."));

        let service = ScaffoldService::new(templates(), Box::new(runner), Box::new(fs));
        service
            .start_project(&project("projectible"), Path::new("."))
            .unwrap();
    }

    #[test]
    fn failed_generation_skips_renames() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|cmd| Err(failed(&cmd.to_string())));

        let mut fs = MockFilesystem::new();
        fs.expect_rename().times(0);

        let service = ScaffoldService::new(templates(), Box::new(runner), Box::new(fs));
        assert!(
            service
                .start_project(&project("projectible"), Path::new("."))
                .is_err()
        );
    }

    #[test]
    fn generate_project_does_not_rename() {
        let mut runner = MockProcessRunner::new();
        runner.expect_run().times(1).returning(|_| Ok(()));

        let mut fs = MockFilesystem::new();
        fs.expect_rename().times(0);

        let service = ScaffoldService::new(templates(), Box::new(runner), Box::new(fs));
        service
            .generate_project(&project("site"), Path::new("out"))
            .unwrap();
    }

    // ── follow_up_start_project ───────────────────────────────────────────

    #[test]
    fn follow_up_without_directory_roots_at_project_name() {
        let mut fs = MockFilesystem::new();
        expect_renames(&mut fs, Path::new("projectible"));

        let service =
            ScaffoldService::new(templates(), Box::new(MockProcessRunner::new()), Box::new(fs));
        service
            .follow_up_start_project(&project("projectible"), None)
            .unwrap();
    }

    #[test]
    fn follow_up_with_directory_roots_at_directory() {
        let mut fs = MockFilesystem::new();
        expect_renames(&mut fs, Path::new("."));

        let service =
            ScaffoldService::new(templates(), Box::new(MockProcessRunner::new()), Box::new(fs));
        service
            .follow_up_start_project(&project("projectible"), Some(Path::new(".")))
            .unwrap();
    }

    #[test]
    fn follow_up_stops_at_first_failed_rename() {
        let mut fs = MockFilesystem::new();
        fs.expect_rename()
            .withf(|f, _| f.to_path_buf() == Path::new("site").join("secrets.py"))
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_rename()
            .withf(|f, _| f.to_path_buf() == Path::new("site").join("gitignore.py"))
            .times(1)
            .returning(|from, _| {
                Err(ApplicationError::FilesystemError {
                    path: from.to_path_buf(),
                    reason: "No such file or directory".into(),
                }
                .into())
            });
        fs.expect_rename()
            .withf(|f, _| f.to_path_buf() == Path::new("site").join("requirements.py"))
            .times(0);

        let service =
            ScaffoldService::new(templates(), Box::new(MockProcessRunner::new()), Box::new(fs));
        let err = service
            .follow_up_start_project(&project("site"), None)
            .unwrap_err();
        assert!(err.to_string().contains("gitignore.py"));
    }

    // ── rename_file ───────────────────────────────────────────────────────

    #[test]
    fn rename_file_targets_base_joined_with_destination() {
        let base = Path::new(".").join("projectible");
        let (from, to) = (base.join("old_name"), base.join("new_name"));
        let mut fs = MockFilesystem::new();
        fs.expect_rename()
            .withf(move |f, t| f.to_path_buf() == from && t.to_path_buf() == to)
            .times(1)
            .returning(|_, _| Ok(()));

        let service =
            ScaffoldService::new(templates(), Box::new(MockProcessRunner::new()), Box::new(fs));
        service.rename_file("old_name", "new_name", &base).unwrap();
    }

    #[test]
    fn rename_file_rejects_escaping_destination() {
        let mut fs = MockFilesystem::new();
        fs.expect_rename().times(0);

        let service =
            ScaffoldService::new(templates(), Box::new(MockProcessRunner::new()), Box::new(fs));
        let err = service
            .rename_file("old_name", "../new_name", Path::new("p"))
            .unwrap_err();
        assert!(matches!(
            err,
            ClassyError::Domain(DomainError::PathEscapesBase { .. })
        ));
    }

    // ── plan_project ──────────────────────────────────────────────────────

    #[test]
    fn plan_project_describes_command_and_renames() {
        let service = ScaffoldService::new(
            templates(),
            Box::new(MockProcessRunner::new()),
            Box::new(MockFilesystem::new()),
        );
        let plan = service
            .plan_project(&project("site"), Path::new("out"))
            .unwrap();

        assert_eq!(plan.command.args()[0], "startproject");
        assert_eq!(plan.renames.len(), 3);
        assert_eq!(plan.renames[2].to, Path::new("out").join("requirements.txt"));
    }

    #[test]
    fn follow_up_base_dir_defaults_to_name() {
        assert_eq!(
            follow_up_base_dir(&project("projectible"), None),
            PathBuf::from("projectible")
        );
        assert_eq!(
            follow_up_base_dir(&project("projectible"), Some(Path::new("."))),
            PathBuf::from(".")
        );
    }
}

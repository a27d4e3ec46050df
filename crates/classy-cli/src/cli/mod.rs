//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "classy-start",
    bin_name = "classy-start",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Start Django projects and apps from custom templates",
    long_about = "classy-start runs django-admin startproject / startapp against \
                  bundled templates, then renames the template-named files \
                  (secrets.py, gitignore.py, requirements.py) to their real names.",
    after_help = "EXAMPLES:\n\
        \x20 classy-start project mysite\n\
        \x20 classy-start project mysite ./backend\n\
        \x20 classy-start app blog\n\
        \x20 classy-start templates",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new Django app from the app template.
    #[command(
        visible_alias = "startapp",
        about = "Create a new Django app",
        after_help = "EXAMPLES:\n\
            \x20 classy-start app blog\n\
            \x20 classy-start app blog --dry-run"
    )]
    App(AppArgs),

    /// Create a new Django project from the project template.
    #[command(
        visible_alias = "startproject",
        about = "Create a new Django project",
        after_help = "EXAMPLES:\n\
            \x20 classy-start project mysite            # into the current directory\n\
            \x20 classy-start project mysite ./backend  # into ./backend\n\
            \x20 classy-start project mysite --dry-run"
    )]
    Project(ProjectArgs),

    /// Show the template directories in use.
    #[command(
        visible_alias = "ls",
        about = "List the template directories and their files"
    )]
    Templates,

    /// Initialise a classy-start configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 classy-start init          # default location\n\
            \x20 classy-start init --force  # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 classy-start completions bash > ~/.local/share/bash-completion/completions/classy-start\n\
            \x20 classy-start completions zsh  > ~/.zfunc/_classy-start\n\
            \x20 classy-start completions fish > ~/.config/fish/completions/classy-start.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the classy-start configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 classy-start config get generator.program\n\
            \x20 classy-start config list\n\
            \x20 classy-start config path"
    )]
    Config(ConfigCommands),
}

// ── app ───────────────────────────────────────────────────────────────────────

/// Arguments for `classy-start app`.
#[derive(Debug, Args)]
pub struct AppArgs {
    /// Name of the app, created in the current directory.
    #[arg(value_name = "NAME", help = "App name")]
    pub name: String,

    /// Print the generator command without running it.
    #[arg(long = "dry-run", help = "Show the command without running it")]
    pub dry_run: bool,
}

// ── project ───────────────────────────────────────────────────────────────────

/// Arguments for `classy-start project`.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Name of the project.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Where the project is generated.  Must exist.
    #[arg(
        value_name = "DIRECTORY",
        default_value = ".",
        help = "Destination directory"
    )]
    pub directory: PathBuf,

    /// Print the generator command and renames without running anything.
    #[arg(
        long = "dry-run",
        help = "Show what would be done without doing it"
    )]
    pub dry_run: bool,

    /// Leave secrets.py, gitignore.py and requirements.py as generated.
    #[arg(
        long = "skip-rename",
        help = "Run the generator only, without renaming files"
    )]
    pub skip_rename: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `classy-start init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `classy-start completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `classy-start config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.program`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the resolved
//! [`TemplateDirs`] and generator program.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--templates-dir`, handled at the call-site)
//! 2. Environment variables prefixed `CLASSY_START__`, with `__` between
//!    key segments (`CLASSY_START__GENERATOR__PROGRAM`)
//! 3. Config file (`--config`, or the platform config dir if present)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use classy_core::domain::{DEFAULT_GENERATOR, TemplateDirs};

use crate::cli::OutputFormat;

const ENV_PREFIX: &str = "CLASSY_START";
const TEMPLATES_DIR_NAME: &str = "templates";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The external generator.
    pub generator: GeneratorConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Executable invoked for `startapp` / `startproject`.
    pub program: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_GENERATOR.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory holding `app_template/` and `project_template/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from defaults, the config file, and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let config = Config::builder()
            .set_default("generator.program", DEFAULT_GENERATOR)?
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?;

        config
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.classy-start.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".classy-start.toml"))
    }

    /// Resolve the template directories.
    ///
    /// `override_root` (from `--templates-dir`) wins over `templates.root`;
    /// with neither, see [`default_templates_root`].
    pub fn template_dirs(&self, override_root: Option<&Path>) -> TemplateDirs {
        let root = override_root
            .map(Path::to_path_buf)
            .or_else(|| self.templates.root.clone())
            .unwrap_or_else(default_templates_root);
        debug!(root = %root.display(), "Resolved templates root");
        TemplateDirs::from_root(root)
    }

    /// Look up a dotted key such as `generator.program`.
    ///
    /// Returns `None` for unknown keys and for unset optional values.
    pub fn get(&self, key: &str) -> Option<String> {
        let tree = serde_json::to_value(self).ok()?;
        let pointer = format!("/{}", key.replace('.', "/"));
        match tree.pointer(&pointer)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Known dotted keys, for error messages.
    pub fn keys() -> &'static [&'static str] {
        &[
            "generator.program",
            "templates.root",
            "output.no_color",
            "output.format",
        ]
    }
}

/// Templates shipped next to the executable, else the platform data dir.
///
/// Falls back to a relative `templates/` when no home directory is known.
pub fn default_templates_root() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATES_DIR_NAME)))
        .filter(|dir| dir.is_dir());

    beside_exe
        .or_else(|| project_dirs().map(|d| d.data_dir().join(TEMPLATES_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from(TEMPLATES_DIR_NAME))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "classy-start", "classy-start")
}

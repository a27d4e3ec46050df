//! Generator command lines.
//!
//! Commands are built as discrete argument vectors and handed to the process
//! runner as-is. No shell is involved, so template paths with spaces or
//! quotes need no escaping. The shell-quoted [`fmt::Display`] form exists for
//! logs and dry runs only.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

use serde::{Serialize, Serializer};

use crate::domain::value_objects::{AppName, ProjectName};

/// Default generator executable.
pub const DEFAULT_GENERATOR: &str = "django-admin";

/// A program plus its ordered arguments.
///
/// Arguments are kept as OS strings so paths reach the generator byte for
/// byte. Only [`fmt::Display`] and serialization go through lossy UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorCommand {
    program: String,
    #[serde(serialize_with = "serialize_lossy")]
    args: Vec<OsString>,
}

impl GeneratorCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// `<program> startapp <name> --template <app-dir>`
    pub fn start_app(program: &str, name: &AppName, template_dir: &Path) -> Self {
        Self::new(program)
            .arg("startapp")
            .arg(name.as_str())
            .arg("--template")
            .arg(template_dir)
    }

    /// `<program> startproject <name> <destination> --template <project-dir>`
    pub fn start_project(
        program: &str,
        name: &ProjectName,
        destination: &Path,
        template_dir: &Path,
    ) -> Self {
        Self::new(program)
            .arg("startproject")
            .arg(name.as_str())
            .arg(destination)
            .arg("--template")
            .arg(template_dir)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<&OsStr> {
        std::iter::once(OsStr::new(&self.program))
            .chain(self.args.iter().map(OsString::as_os_str))
            .collect()
    }
}

impl fmt::Display for GeneratorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in self.argv() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            f.write_str(&shell_quote(&part.to_string_lossy()))?;
        }
        Ok(())
    }
}

fn serialize_lossy<S: Serializer>(args: &[OsString], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(args.iter().map(|arg| arg.to_string_lossy()))
}

/// Single-quote a word when it contains anything outside a safe set.
fn shell_quote(word: &str) -> String {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@+,".contains(c));
    if safe {
        word.to_owned()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

//! Recording process runner for testing.

use std::sync::{Arc, Mutex};

use classy_core::{
    application::{ApplicationError, ports::ProcessRunner},
    domain::GeneratorCommand,
    error::{ClassyError, ClassyResult},
};

/// Records every command instead of spawning it.
///
/// Clones share the recorded history.
#[derive(Debug, Clone, Default)]
pub struct RecordingProcessRunner {
    calls: Arc<Mutex<Vec<GeneratorCommand>>>,
    exit_code: Option<i32>,
}

impl RecordingProcessRunner {
    /// A runner whose commands all succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner whose commands all exit with `code`.
    pub fn failing(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            ..Self::default()
        }
    }

    /// Commands run so far, in order.
    pub fn calls(&self) -> Vec<GeneratorCommand> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of runs of a command with exactly this argv.
    pub fn call_count(&self, argv: &[&str]) -> usize {
        self.calls().iter().filter(|c| c.argv() == argv).count()
    }
}

impl ProcessRunner for RecordingProcessRunner {
    fn run(&self, command: &GeneratorCommand) -> ClassyResult<()> {
        self.calls
            .lock()
            .map_err(|_| ClassyError::Internal {
                message: "recording runner lock poisoned".into(),
            })?
            .push(command.clone());

        match self.exit_code {
            Some(code) => Err(ApplicationError::ProcessFailed {
                command: command.to_string(),
                code: Some(code),
            }
            .into()),
            None => Ok(()),
        }
    }
}

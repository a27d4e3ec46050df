//! Process runner backed by `std::process::Command`.

use std::process::Command;

use tracing::{debug, instrument};

use classy_core::{
    application::{ApplicationError, ports::ProcessRunner},
    domain::GeneratorCommand,
    error::ClassyResult,
};

/// Production process runner.
///
/// Spawns the program directly (no shell) with inherited working directory,
/// environment, and stdio, then blocks until it exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    #[instrument(skip_all, fields(program = command.program()))]
    fn run(&self, command: &GeneratorCommand) -> ClassyResult<()> {
        debug!(args = ?command.args(), "Spawning generator");

        let status = Command::new(command.program())
            .args(command.args())
            .status()
            .map_err(|e| ApplicationError::ProcessSpawn {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        debug!(code = ?status.code(), "Generator exited");

        if !status.success() {
            return Err(ApplicationError::ProcessFailed {
                command: command.to_string(),
                code: status.code(),
            }
            .into());
        }

        Ok(())
    }
}

//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `classy-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::GeneratorCommand;
use crate::error::ClassyResult;

/// Port for running the external generator.
///
/// Implemented by:
/// - `classy_adapters::process::SystemProcessRunner` (production)
/// - `classy_adapters::process::RecordingProcessRunner` (testing)
///
/// ## Contract
///
/// - Blocks until the child exits; no timeout, no cancellation
/// - The child inherits the caller's working directory and stdio
/// - Returns `Ok(())` only for a successful exit status
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    /// Run the command to completion.
    fn run(&self, command: &GeneratorCommand) -> ClassyResult<()>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `classy_adapters::filesystem::LocalFilesystem` (production)
/// - `classy_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Rename `from` to `to`, replacing `to` if it exists.
    fn rename(&self, from: &Path, to: &Path) -> ClassyResult<()>;
}

//! Infrastructure adapters for classy-start.
//!
//! This crate implements the ports defined in `classy-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod process;
pub mod template_inspector;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingProcessRunner, SystemProcessRunner};
pub use template_inspector::{TemplateListing, inspect};

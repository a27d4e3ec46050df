//! Application layer for classy-start.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences domain values through the ports but holds
//! no rules of its own. Naming and path rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ProjectPlan, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ProcessRunner};

pub use error::ApplicationError;

// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for classy-start.
//!
//! Pure values with no I/O: validated names, the template directory pair,
//! generator command lines, and the fixed post-generation rename mapping.
//! Processes and filesystem access are reached through the ports in
//! `crate::application::ports`.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process, or network calls
//! - **Immutable values**: All domain objects are Clone + PartialEq
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    DEFAULT_GENERATOR, GeneratorCommand, RENAME_MAPPING, RenamePair, ResolvedRename,
    TemplateDirs, plan_renames,
};

pub use error::DomainError;

pub use value_objects::{AppName, ProjectName, TemplateKind};

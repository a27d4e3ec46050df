//! classy-core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! classy-start Django scaffolding tool, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          classy-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: ProcessRunner, Filesystem)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     classy-adapters (Infrastructure)    │
//! │ (SystemProcessRunner, LocalFilesystem)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (AppName, TemplateDirs, RENAME_MAPPING) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::path::Path;
//!
//! use classy_core::{
//!     application::ScaffoldService,
//!     domain::{ProjectName, TemplateDirs},
//! };
//!
//! // 1. Resolve template directories once, at startup
//! let templates = TemplateDirs::from_root("/usr/share/classy-start/templates");
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(templates, runner, filesystem);
//! service
//!     .start_project(&ProjectName::new("mysite").unwrap(), Path::new("."))
//!     .unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ProjectPlan, ScaffoldService,
        ports::{Filesystem, ProcessRunner},
    };
    pub use crate::domain::{
        AppName, DomainError, GeneratorCommand, ProjectName, RENAME_MAPPING, RenamePair,
        ResolvedRename, TemplateDirs, TemplateKind,
    };
    pub use crate::error::{ClassyError, ClassyResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

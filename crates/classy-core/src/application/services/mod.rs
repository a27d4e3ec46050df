//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "start a project" or "start an app".

pub mod scaffold_service;

pub use scaffold_service::{ProjectPlan, ScaffoldService};

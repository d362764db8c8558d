//! Dependency installation and generator invocation.
//!
//! # Modules
//!
//! - [`dependencies`] - The fixed package batch and the commands that use it
//! - [`pipeline`] - The [`Launcher`] that sequences the steps
//! - [`report`] - Step outcomes and the launch summary

pub mod dependencies;
pub mod pipeline;
pub mod report;

pub use dependencies::{DependencyPlan, DEPENDENCIES};
pub use pipeline::Launcher;
pub use report::{LaunchReport, Step, StepOutcome, StepStatus};

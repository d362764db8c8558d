//! Error types for launcher operations.
//!
//! This module defines [`LauncherError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The procedural failures (`RuntimeNotFound`, `DependencyInstallFailed`,
//!   `ScriptMissing`, `GenerationFailed`) are caught by the `run` command
//!   and reported with a plain-language message and a hint
//! - Everything else propagates to `main`, which prints it and exits 1
//! - [`LauncherError::exit_code`] decides the process status for each kind

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// No usable Python interpreter could be found.
    #[error("Python runtime not found (tried: {interpreter})")]
    RuntimeNotFound { interpreter: String },

    /// The batch `pip install` exited non-zero.
    #[error("Failed to install dependencies ({packages}), exit code {code:?}")]
    DependencyInstallFailed {
        packages: String,
        code: Option<i32>,
    },

    /// The generator script does not exist.
    #[error("Generator script not found: {}", script.display())]
    ScriptMissing { script: PathBuf },

    /// The generator script exited non-zero.
    #[error("Presentation generation failed for {}: {message}", script.display())]
    GenerationFailed {
        script: PathBuf,
        code: Option<i32>,
        message: String,
    },

    /// A subprocess could not be spawned.
    #[error("Command could not be started: {command}")]
    CommandFailed { command: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LauncherError {
    /// Process exit status for this error.
    ///
    /// Failing sub-steps propagate their own code; anything without a
    /// usable non-zero code maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DependencyInstallFailed { code, .. } | Self::GenerationFailed { code, .. } => {
                exit_status(*code)
            }
            _ => 1,
        }
    }
}

/// Normalize a subprocess exit code into a failing process status.
///
/// Zero, negative, missing (killed by signal) and out-of-range codes all
/// become 1 so that a failure never reports success.
pub fn exit_status(code: Option<i32>) -> i32 {
    code.filter(|c| (1..=255).contains(c)).unwrap_or(1)
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;

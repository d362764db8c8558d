//! deck-launcher - one-step launcher for the Nokia failure analysis
//! presentation generator.
//!
//! The launcher checks that Python is installed, upgrades pip, installs
//! the generator's packages in one batch and then runs the generator
//! script, reporting each outcome in plain language.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Launch settings and fixed names
//! - [`error`] - Error types and result aliases
//! - [`launcher`] - The check, install and generate sequence
//! - [`requirements`] - Python runtime discovery
//! - [`shell`] - Subprocess execution
//! - [`ui`] - Spinners, status lines and the final pause
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use deck_launcher::config::LaunchConfig;
//! use deck_launcher::launcher::Launcher;
//! use deck_launcher::shell::MockRunner;
//! use deck_launcher::ui::MockUI;
//!
//! let config = LaunchConfig::new(Path::new("."))
//!     .with_dry_run(true)
//!     .with_pause(false);
//! let runner = MockRunner::new().on_output("--version", 0, "Python 3.12.1");
//! let mut ui = MockUI::new();
//!
//! let report = Launcher::new(&config, &runner).run(&mut ui).unwrap();
//! assert!(report.dry_run);
//! assert!(!runner.was_called("pip"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{LauncherError, Result};

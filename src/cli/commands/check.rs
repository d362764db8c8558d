//! Check command implementation.
//!
//! `deck-launcher check` only looks for a Python interpreter. Nothing is
//! installed and the generator is not run.

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::error::{LauncherError, Result};
use crate::requirements::{RuntimeChecker, RuntimeInfo};
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::{hints, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// JSON shape printed by `check --json`.
#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    runtime: Option<&'a RuntimeInfo>,
}

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Execute against a specific command runner.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        runner: &dyn CommandRunner,
    ) -> Result<CommandResult> {
        let checker = RuntimeChecker::new(runner);
        let found = match checker.check(self.args.python.as_deref()) {
            Ok(runtime) => Some(runtime),
            Err(LauncherError::RuntimeNotFound { interpreter }) => {
                tracing::debug!("No runtime among: {}", interpreter);
                None
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            let output = CheckOutput {
                found: found.is_some(),
                runtime: found.as_ref(),
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| LauncherError::Other(e.into()))?;
            println!("{}", json);
            return Ok(if found.is_some() {
                CommandResult::success()
            } else {
                CommandResult::failure(1)
            });
        }

        match found {
            Some(runtime) => {
                ui.success(&format!("Found {}", runtime.describe()));
                if let Some(version) = runtime.version.filter(|v| !v.is_python3()) {
                    ui.warning(&format!(
                        "Python {} detected; the generator needs Python 3.",
                        version
                    ));
                }
                Ok(CommandResult::success())
            }
            None => {
                ui.error("Python is not installed or not on PATH.");
                ui.show_hint(&hints::runtime_missing());
                Ok(CommandResult::failure(1))
            }
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(ui, &SystemRunner)
    }
}

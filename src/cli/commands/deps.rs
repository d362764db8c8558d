//! Deps command implementation.

use std::path::{Path, PathBuf};

use crate::cli::args::DepsArgs;
use crate::error::{LauncherError, Result};
use crate::launcher::DependencyPlan;
use crate::requirements::DEFAULT_INTERPRETERS;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Lists the packages and commands a launch would use. Runs nothing.
pub struct DepsCommand {
    project_root: PathBuf,
    args: DepsArgs,
}

impl DepsCommand {
    /// Create a new deps command.
    pub fn new(project_root: &Path, args: DepsArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn plan(&self) -> DependencyPlan {
        let python = self
            .args
            .python
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INTERPRETERS[0]));
        DependencyPlan::new(&python, &self.args.script, &self.project_root)
    }
}

impl Command for DepsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let plan = self.plan();

        if self.args.json {
            let json = serde_json::to_string_pretty(&plan)
                .map_err(|e| LauncherError::Other(e.into()))?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Packages");
        for package in &plan.packages {
            ui.message(&format!("  {}", package));
        }
        ui.show_header("Commands");
        for command in &plan.commands {
            ui.message(&format!("  {}", command));
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn lists_packages_and_commands() {
        let cmd = DepsCommand::new(Path::new("/work"), DepsArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.headers(), ["Packages", "Commands"]);
        assert!(ui.has_message("  Pillow"));
        assert!(ui.has_message("-m pip install --upgrade pip"));
    }

    #[test]
    fn explicit_python_appears_in_commands() {
        let cmd = DepsCommand::new(
            Path::new("/work"),
            DepsArgs {
                python: Some(PathBuf::from("python3.12")),
                ..Default::default()
            },
        );

        let plan = cmd.plan();

        assert!(plan.commands.iter().all(|c| c.starts_with("python3.12 ")));
    }

    #[test]
    fn listed_generator_command_uses_configured_script() {
        let cmd = DepsCommand::new(
            Path::new("/work"),
            DepsArgs {
                script: PathBuf::from("custom_generator.py"),
                ..Default::default()
            },
        );

        let plan = cmd.plan();

        assert_eq!(plan.commands[2], "python custom_generator.py");
    }
}

//! Run command implementation.
//!
//! The `deck-launcher run` command (also the default with no subcommand)
//! checks for Python, installs the generator's dependencies and runs it.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::{LaunchConfig, PAUSE_PROMPT};
use crate::error::{LauncherError, Result};
use crate::launcher::{LaunchReport, Launcher};
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::{format_duration, hints, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Build the launch configuration from args.
    fn build_config(&self) -> LaunchConfig {
        LaunchConfig::new(&self.project_root)
            .with_python(self.args.python.clone())
            .with_script(self.args.script.clone())
            .with_dry_run(self.args.dry_run)
            .with_pause(!self.args.no_pause && !self.args.non_interactive)
    }

    /// Execute against a specific command runner.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        runner: &dyn CommandRunner,
    ) -> Result<CommandResult> {
        let config = self.build_config();

        ui.show_header("Nokia Failure Analysis presentation");
        if config.dry_run {
            ui.message("Running in dry-run mode - no commands will be executed");
        }

        let outcome = Launcher::new(&config, runner).run(ui);
        let result = self.report(ui, &config, outcome);

        if config.pause {
            ui.pause(PAUSE_PROMPT);
        }
        result
    }

    /// Turn the launch outcome into user-facing messages and an exit code.
    fn report(
        &self,
        ui: &mut dyn UserInterface,
        config: &LaunchConfig,
        outcome: Result<LaunchReport>,
    ) -> Result<CommandResult> {
        match outcome {
            Ok(report) if report.dry_run => {
                ui.success("Dry run complete");
                ui.show_hint(hints::after_dry_run());
                Ok(CommandResult::success())
            }
            Ok(report) => {
                ui.success(&format!(
                    "Presentation generated: {} ({})",
                    config.output_file,
                    format_duration(report.total_duration)
                ));
                ui.message(&format!(
                    "File location: {}",
                    report.output_path.display()
                ));
                let ignored = report.ignored_steps();
                if !ignored.is_empty() {
                    tracing::debug!("Launch finished with ignored steps: {:?}", ignored);
                }
                Ok(CommandResult::success())
            }
            Err(e @ LauncherError::RuntimeNotFound { .. }) => {
                tracing::debug!("{}", e);
                ui.error("Python is not installed or not on PATH.");
                ui.show_hint(&hints::runtime_missing());
                Ok(CommandResult::failure(e.exit_code()))
            }
            Err(e @ LauncherError::DependencyInstallFailed { .. }) => {
                tracing::debug!("{}", e);
                ui.error("Failed to install the required Python packages.");
                ui.show_hint(hints::install_failed());
                Ok(CommandResult::failure(e.exit_code()))
            }
            Err(e @ LauncherError::ScriptMissing { .. }) => {
                tracing::debug!("{}", e);
                ui.error(&e.to_string());
                ui.show_hint(&hints::script_missing(
                    &config.script.display().to_string(),
                ));
                Ok(CommandResult::failure(e.exit_code()))
            }
            Err(e @ LauncherError::CommandFailed { .. }) => {
                tracing::debug!("{}", e);
                ui.error(&e.to_string());
                ui.show_hint(hints::command_unavailable());
                Ok(CommandResult::failure(e.exit_code()))
            }
            Err(e @ LauncherError::GenerationFailed { .. }) => {
                tracing::debug!("{}", e);
                ui.error("The presentation generator reported an error.");
                ui.show_hint(hints::generation_failed());
                Ok(CommandResult::failure(e.exit_code()))
            }
            Err(e) => Err(e),
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(ui, &SystemRunner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SCRIPT, OUTPUT_FILE};
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DEFAULT_SCRIPT), "print('generating')\n").unwrap();
        temp
    }

    fn args() -> RunArgs {
        RunArgs {
            python: Some(PathBuf::from("python")),
            no_pause: true,
            ..Default::default()
        }
    }

    fn healthy_runner() -> MockRunner {
        MockRunner::new().on_output("--version", 0, "Python 3.12.1")
    }

    #[test]
    fn run_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = RunCommand::new(temp.path(), RunArgs::default());

        assert_eq!(cmd.project_root(), temp.path());
        assert_eq!(cmd.args().script, PathBuf::from(DEFAULT_SCRIPT));
    }

    #[test]
    fn build_config_maps_flags() {
        let temp = TempDir::new().unwrap();
        let cmd = RunCommand::new(
            temp.path(),
            RunArgs {
                script: PathBuf::from("other.py"),
                dry_run: true,
                non_interactive: true,
                ..Default::default()
            },
        );

        let config = cmd.build_config();

        assert_eq!(config.working_dir, temp.path());
        assert_eq!(config.script, PathBuf::from("other.py"));
        assert!(config.dry_run);
        assert!(!config.pause);
    }

    #[test]
    fn success_names_the_output_file() {
        let temp = setup_project();
        let cmd = RunCommand::new(temp.path(), args());
        let runner = healthy_runner();
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&mut ui, &runner).unwrap();

        assert_eq!(result, CommandResult::success());
        assert!(ui.has_success(OUTPUT_FILE));
        assert!(ui.has_message("File location"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn missing_runtime_points_to_download_page() {
        let temp = setup_project();
        let cmd = RunCommand::new(temp.path(), args());
        let runner = MockRunner::new().on_missing("python");
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&mut ui, &runner).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Python is not installed"));
        assert!(ui.has_hint("https://www.python.org/downloads/"));
        assert!(!runner.was_called("pip"));
    }

    #[test]
    fn install_failure_mentions_connectivity_and_propagates_code() {
        let temp = setup_project();
        let cmd = RunCommand::new(temp.path(), args());
        let runner = healthy_runner().on_exit("pip install python-pptx", 7);
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&mut ui, &runner).unwrap();

        assert_eq!(result, CommandResult::failure(7));
        assert!(ui.has_hint("internet connection"));
        assert!(!runner.was_called(DEFAULT_SCRIPT));
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn generator_failure_is_reported() {
        let temp = setup_project();
        let cmd = RunCommand::new(temp.path(), args());
        let runner = healthy_runner().on_exit(DEFAULT_SCRIPT, 3);
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&mut ui, &runner).unwrap();

        assert_eq!(result, CommandResult::failure(3));
        assert!(ui.has_error("generator reported an error"));
        assert!(ui.has_hint("output above"));
    }

    #[test]
    fn missing_script_gets_its_own_hint() {
        let temp = TempDir::new().unwrap();
        let cmd = RunCommand::new(temp.path(), args());
        let runner = healthy_runner();
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&mut ui, &runner).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Generator script not found"));
        assert!(ui.has_hint("--script"));
    }

    #[test]
    fn generator_that_removes_its_script_is_still_a_generator_failure() {
        let temp = TempDir::new().unwrap();
        let cmd = RunCommand::new(temp.path(), args());
        let config = cmd.build_config();
        let mut ui = MockUI::new();

        let result = cmd
            .report(
                &mut ui,
                &config,
                Err(LauncherError::GenerationFailed {
                    script: config.script_path(),
                    code: Some(2),
                    message: "exited with code 2".to_string(),
                }),
            )
            .unwrap();

        assert_eq!(result, CommandResult::failure(2));
        assert!(ui.has_error("generator reported an error"));
        assert!(!ui.has_error("not found"));
    }

    #[test]
    fn generator_that_cannot_start_is_reported_before_the_pause() {
        let temp = setup_project();
        let cmd = RunCommand::new(
            temp.path(),
            RunArgs {
                no_pause: false,
                ..args()
            },
        );
        let runner = healthy_runner().on_missing(DEFAULT_SCRIPT);
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&mut ui, &runner).unwrap();

        assert_eq!(result, CommandResult::failure(1));
        assert!(ui.has_error("could not be started"));
        assert!(!ui.has_error("generator reported an error"));
        assert!(ui.has_hint("interpreter"));
        assert_eq!(ui.pauses(), [PAUSE_PROMPT]);
    }

    #[test]
    fn install_that_cannot_start_does_not_blame_the_network() {
        let temp = setup_project();
        let cmd = RunCommand::new(temp.path(), args());
        let runner = healthy_runner().on_missing("pip install python-pptx");
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&mut ui, &runner).unwrap();

        assert_eq!(result, CommandResult::failure(1));
        assert!(ui.has_error("could not be started"));
        assert!(!ui.has_hint("internet connection"));
    }

    #[test]
    fn dry_run_executes_nothing_after_the_check() {
        let temp = setup_project();
        let cmd = RunCommand::new(
            temp.path(),
            RunArgs {
                dry_run: true,
                ..args()
            },
        );
        let runner = healthy_runner();
        let mut ui = MockUI::new();

        let result = cmd.execute_with(&mut ui, &runner).unwrap();

        assert!(result.success);
        assert!(ui.has_message("dry-run mode"));
        assert!(ui.has_hint("--dry-run"));
        assert!(!runner.was_called("pip"));
    }

    #[test]
    fn pauses_after_success_and_failure_unless_disabled() {
        let temp = setup_project();
        let pausing = RunArgs {
            no_pause: false,
            ..args()
        };

        let mut ui = MockUI::new();
        RunCommand::new(temp.path(), pausing.clone())
            .execute_with(&mut ui, &healthy_runner())
            .unwrap();
        assert_eq!(ui.pauses(), [PAUSE_PROMPT]);

        let mut ui = MockUI::new();
        RunCommand::new(temp.path(), pausing)
            .execute_with(&mut ui, &MockRunner::new().on_missing("python"))
            .unwrap();
        assert_eq!(ui.pauses(), [PAUSE_PROMPT]);

        let mut ui = MockUI::new();
        RunCommand::new(temp.path(), args())
            .execute_with(&mut ui, &healthy_runner())
            .unwrap();
        assert!(ui.pauses().is_empty());
    }
}

//! The check → install → invoke sequence.
//!
//! Each step is a method returning its own outcome; [`Launcher::run`]
//! chains them with `?` so nothing runs after an upstream failure.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::LaunchConfig;
use crate::error::{LauncherError, Result};
use crate::requirements::{RuntimeChecker, RuntimeInfo};
use crate::shell::{CommandOptions, CommandResult, CommandRunner, CommandSpec};
use crate::ui::{format_duration, SpinnerHandle, UserInterface};

use super::dependencies::{
    generate_command, install_command, upgrade_pip_command, DEPENDENCIES,
};
use super::report::{LaunchReport, Step, StepOutcome};

/// Drives one launch.
pub struct Launcher<'a> {
    config: &'a LaunchConfig,
    runner: &'a dyn CommandRunner,
    path_entries: Option<Vec<PathBuf>>,
}

impl<'a> Launcher<'a> {
    /// Create a launcher for a configuration.
    pub fn new(config: &'a LaunchConfig, runner: &'a dyn CommandRunner) -> Self {
        Self {
            config,
            runner,
            path_entries: None,
        }
    }

    /// Search these directories for the interpreter instead of `PATH`.
    pub fn with_path_entries(mut self, entries: Vec<PathBuf>) -> Self {
        self.path_entries = Some(entries);
        self
    }

    fn checker(&self) -> RuntimeChecker<'a> {
        match &self.path_entries {
            Some(entries) => RuntimeChecker::with_path(self.runner, entries.clone()),
            None => RuntimeChecker::new(self.runner),
        }
    }

    /// Run every step in order, stopping at the first fatal failure.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<LaunchReport> {
        let started = Instant::now();

        let (runtime, check) = self.check_runtime(ui)?;
        let mut steps = vec![check];

        if self.config.dry_run {
            for (step, spec) in self.plan(&runtime) {
                ui.message(&format!("  Would run: {}", spec.display()));
                steps.push(StepOutcome::planned(step));
            }
        } else {
            steps.push(self.upgrade_pip(&runtime, ui));
            steps.push(self.install_dependencies(&runtime, ui)?);
            steps.push(self.generate(&runtime, ui)?);
        }

        Ok(LaunchReport {
            runtime,
            output_path: self.config.output_path(),
            steps,
            dry_run: self.config.dry_run,
            total_duration: started.elapsed(),
        })
    }

    /// The commands a real run would execute after the runtime check.
    pub fn plan(&self, runtime: &RuntimeInfo) -> Vec<(Step, CommandSpec)> {
        let python = &runtime.interpreter;
        let cwd = &self.config.working_dir;
        vec![
            (Step::PipUpgrade, upgrade_pip_command(python, cwd)),
            (Step::Install, install_command(python, cwd)),
            (
                Step::Generate,
                generate_command(python, &self.config.script, cwd),
            ),
        ]
    }

    /// Find the interpreter. Fatal when none answers.
    pub fn check_runtime(&self, ui: &mut dyn UserInterface) -> Result<(RuntimeInfo, StepOutcome)> {
        let started = Instant::now();
        let mut spinner = ui.start_spinner("Checking for Python...");

        match self.checker().check(self.config.python.as_deref()) {
            Ok(runtime) => {
                spinner.finish_success(&format!("Found {}", runtime.describe()));
                if let Some(version) = runtime.version.filter(|v| !v.is_python3()) {
                    ui.warning(&format!(
                        "Python {} detected; the generator needs Python 3.",
                        version
                    ));
                }
                let outcome = StepOutcome::succeeded(Step::RuntimeCheck, started.elapsed());
                Ok((runtime, outcome))
            }
            Err(e) => {
                spinner.finish_error("Python not found");
                Err(e)
            }
        }
    }

    /// Upgrade pip. Never fatal.
    pub fn upgrade_pip(&self, runtime: &RuntimeInfo, ui: &mut dyn UserInterface) -> StepOutcome {
        let spec = upgrade_pip_command(&runtime.interpreter, &self.config.working_dir);
        let show_output = ui.output_mode().shows_command_output();
        let display = StepDisplay::start(ui, "Upgrading pip...", show_output);

        let result = self.execute(&spec, show_output).unwrap_or_else(|e| {
            tracing::debug!("{}", e);
            CommandResult::failure(None, String::new(), e.to_string(), Duration::ZERO)
        });
        if result.success {
            display.success(ui, &format!("pip is up to date ({})", format_duration(result.duration)));
            StepOutcome::succeeded(Step::PipUpgrade, result.duration)
        } else {
            tracing::warn!(
                "pip upgrade exited with {:?}; continuing",
                result.exit_code
            );
            display.warning(ui, "Could not upgrade pip, continuing with the installed version");
            StepOutcome::ignored(Step::PipUpgrade, result.exit_code, result.duration)
        }
    }

    /// Install the dependency batch. Fatal on a spawn failure or non-zero exit.
    pub fn install_dependencies(
        &self,
        runtime: &RuntimeInfo,
        ui: &mut dyn UserInterface,
    ) -> Result<StepOutcome> {
        let spec = install_command(&runtime.interpreter, &self.config.working_dir);
        let show_output = ui.output_mode().shows_command_output();
        let packages = DEPENDENCIES.join(", ");
        let display = StepDisplay::start(ui, &format!("Installing {}...", packages), show_output);

        let result = match self.execute(&spec, show_output) {
            Ok(result) => result,
            Err(e) => {
                display.error(ui, "pip could not be started");
                return Err(e);
            }
        };
        if result.success {
            display.success(
                ui,
                &format!("Dependencies installed ({})", format_duration(result.duration)),
            );
            return Ok(StepOutcome::succeeded(Step::Install, result.duration));
        }

        display.error(ui, "Dependency installation failed");
        if !show_output {
            ui.show_error_block(&spec.display(), &result.combined_output(), None);
        }
        Err(LauncherError::DependencyInstallFailed {
            packages,
            code: result.exit_code,
        })
    }

    /// Invoke the generator. Fatal on a missing script, a spawn failure or
    /// a non-zero exit.
    pub fn generate(&self, runtime: &RuntimeInfo, ui: &mut dyn UserInterface) -> Result<StepOutcome> {
        let script = self.config.script_path();
        if !script.is_file() {
            return Err(LauncherError::ScriptMissing { script });
        }

        let spec = generate_command(
            &runtime.interpreter,
            &self.config.script,
            &self.config.working_dir,
        );
        let show_output = ui.output_mode().shows_script_output();
        let display = StepDisplay::start(ui, "Generating presentation...", show_output);

        let result = match self.execute(&spec, show_output) {
            Ok(result) => result,
            Err(e) => {
                display.error(ui, "Generator could not be started");
                return Err(e);
            }
        };
        if result.success {
            display.success(
                ui,
                &format!("Generator finished ({})", format_duration(result.duration)),
            );
            return Ok(StepOutcome::succeeded(Step::Generate, result.duration));
        }

        display.error(ui, "Generator failed");
        if !show_output {
            ui.show_error_block(&spec.display(), &result.combined_output(), None);
        }
        let message = match result.exit_code {
            Some(code) => format!("exited with code {}", code),
            None => "terminated by a signal".to_string(),
        };
        Err(LauncherError::GenerationFailed {
            script,
            code: result.exit_code,
            message,
        })
    }

    /// Run a command with output captured or passed through.
    fn execute(&self, spec: &CommandSpec, show_output: bool) -> Result<CommandResult> {
        let options = if show_output {
            CommandOptions::inherited()
        } else {
            CommandOptions::captured()
        };
        self.runner.run(spec, &options)
    }
}

/// Progress for one step: a spinner when output is captured, plain
/// status lines when the command writes to the terminal itself.
struct StepDisplay {
    spinner: Option<Box<dyn SpinnerHandle>>,
}

impl StepDisplay {
    fn start(ui: &mut dyn UserInterface, message: &str, show_output: bool) -> Self {
        if show_output {
            ui.message(message);
            Self { spinner: None }
        } else {
            Self {
                spinner: Some(ui.start_spinner(message)),
            }
        }
    }

    fn success(self, ui: &mut dyn UserInterface, msg: &str) {
        match self.spinner {
            Some(mut s) => s.finish_success(msg),
            None => ui.success(msg),
        }
    }

    fn warning(self, ui: &mut dyn UserInterface, msg: &str) {
        match self.spinner {
            Some(mut s) => s.finish_warning(msg),
            None => ui.warning(msg),
        }
    }

    fn error(self, ui: &mut dyn UserInterface, msg: &str) {
        match self.spinner {
            Some(mut s) => s.finish_error(msg),
            None => ui.error(msg),
        }
    }
}

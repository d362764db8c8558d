//! Launch settings.
//!
//! A [`LaunchConfig`] is assembled once per invocation from CLI flags
//! (with their `DECK_*` environment fallbacks) and the defaults below.
//! There is no config file.

use std::path::{Path, PathBuf};

/// Generator script looked up in the working directory.
pub const DEFAULT_SCRIPT: &str = "nokia_presentation_generator.py";

/// File the generator writes on success.
pub const OUTPUT_FILE: &str = "Nokia_Failure_Analysis_PowerPynt.pptx";

/// Message shown while waiting for the final keypress.
pub const PAUSE_PROMPT: &str = "Press any key to exit...";

/// Everything a launch needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Directory the generator runs in and writes its output to.
    pub working_dir: PathBuf,

    /// Interpreter override; `None` searches the defaults.
    pub python: Option<PathBuf>,

    /// Generator script, absolute or relative to `working_dir`.
    pub script: PathBuf,

    /// Expected output filename, named in the success message.
    pub output_file: String,

    /// Print the plan instead of running it.
    pub dry_run: bool,

    /// Wait for a keypress before exiting.
    pub pause: bool,
}

impl LaunchConfig {
    /// Defaults for a working directory.
    pub fn new(working_dir: &Path) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            python: None,
            script: PathBuf::from(DEFAULT_SCRIPT),
            output_file: OUTPUT_FILE.to_string(),
            dry_run: false,
            pause: true,
        }
    }

    /// Use a specific interpreter.
    pub fn with_python(mut self, python: Option<PathBuf>) -> Self {
        self.python = python;
        self
    }

    /// Use a different generator script.
    pub fn with_script(mut self, script: PathBuf) -> Self {
        self.script = script;
        self
    }

    /// Enable or disable dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enable or disable the final keypress pause.
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    /// The script path resolved against the working directory.
    pub fn script_path(&self) -> PathBuf {
        if self.script.is_absolute() {
            self.script.clone()
        } else {
            self.working_dir.join(&self.script)
        }
    }

    /// Where the generator is expected to write its output.
    pub fn output_path(&self) -> PathBuf {
        self.working_dir.join(&self.output_file)
    }
}

//! Scripted command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything.
//! Each rule matches on a substring of the rendered command line; the first
//! matching rule decides the outcome. Unmatched commands succeed with no
//! output.
//!
//! # Example
//!
//! ```
//! use deck_launcher::shell::{CommandOptions, CommandRunner, CommandSpec, MockRunner};
//!
//! let runner = MockRunner::new().on_exit("pip install", 1);
//! let spec = CommandSpec::new("python").args(["-m", "pip", "install", "numpy"]);
//! let result = runner.run(&spec, &CommandOptions::captured()).unwrap();
//!
//! assert_eq!(result.exit_code, Some(1));
//! assert!(runner.was_called("numpy"));
//! ```

use std::cell::RefCell;
use std::time::Duration;

use crate::error::{LauncherError, Result};

use super::command::{CommandOptions, CommandResult, CommandRunner, CommandSpec};

#[derive(Debug, Clone)]
enum MockResponse {
    Exit { code: Option<i32>, stdout: String },
    Unavailable,
}

/// Command runner that replays configured outcomes.
#[derive(Debug, Default)]
pub struct MockRunner {
    rules: Vec<(String, MockResponse)>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands containing `pattern` exit with `code`.
    pub fn on_exit(self, pattern: &str, code: i32) -> Self {
        self.on_output(pattern, code, "")
    }

    /// Commands containing `pattern` print `stdout` and exit with `code`.
    pub fn on_output(mut self, pattern: &str, code: i32, stdout: &str) -> Self {
        self.rules.push((
            pattern.to_string(),
            MockResponse::Exit {
                code: Some(code),
                stdout: stdout.to_string(),
            },
        ));
        self
    }

    /// Commands containing `pattern` are terminated by a signal.
    pub fn on_signal(mut self, pattern: &str) -> Self {
        self.rules.push((
            pattern.to_string(),
            MockResponse::Exit {
                code: None,
                stdout: String::new(),
            },
        ));
        self
    }

    /// Commands containing `pattern` cannot be spawned.
    pub fn on_missing(mut self, pattern: &str) -> Self {
        self.rules
            .push((pattern.to_string(), MockResponse::Unavailable));
        self
    }

    /// Command lines seen so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether any command line contained `pattern`.
    pub fn was_called(&self, pattern: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.contains(pattern))
    }

    /// Forget recorded calls, keeping the rules.
    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, spec: &CommandSpec, options: &CommandOptions) -> Result<CommandResult> {
        let line = spec.display();
        self.calls.borrow_mut().push(line.clone());

        let response = self
            .rules
            .iter()
            .find(|(pattern, _)| line.contains(pattern.as_str()))
            .map(|(_, response)| response.clone());

        match response {
            Some(MockResponse::Unavailable) => Err(LauncherError::CommandFailed { command: line }),
            Some(MockResponse::Exit { code, stdout }) => {
                let stdout = if options.capture_stdout {
                    stdout
                } else {
                    String::new()
                };
                if code == Some(0) {
                    Ok(CommandResult::success(stdout, String::new(), Duration::ZERO))
                } else {
                    Ok(CommandResult::failure(
                        code,
                        stdout,
                        String::new(),
                        Duration::ZERO,
                    ))
                }
            }
            None => Ok(CommandResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
        }
    }
}

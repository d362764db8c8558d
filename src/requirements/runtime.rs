//! Python runtime discovery.
//!
//! The [`RuntimeChecker`] finds an interpreter that answers a `--version`
//! query. Nothing else in the launcher runs until this succeeds.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{LauncherError, Result};
use crate::shell::{CommandOptions, CommandRunner, CommandSpec};

use super::probe::{parse_system_path, resolve_tool_path};

/// Where users are sent when no interpreter is found.
pub const DOWNLOAD_URL: &str = "https://www.python.org/downloads/";

/// Interpreter names tried when none is configured, in order.
#[cfg(windows)]
pub const DEFAULT_INTERPRETERS: &[&str] = &["python", "py"];

/// Interpreter names tried when none is configured, in order.
#[cfg(not(windows))]
pub const DEFAULT_INTERPRETERS: &[&str] = &["python", "python3"];

/// Matches the banner printed by `python --version`.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python\s+(\d+)\.(\d+)(?:\.(\d+))?").expect("VERSION_REGEX must compile")
});

/// A parsed interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl PythonVersion {
    /// Parse the `Python X.Y[.Z]` banner. Returns `None` for anything else.
    pub fn parse(banner: &str) -> Option<Self> {
        let caps = VERSION_REGEX.captures(banner)?;
        Some(Self {
            major: caps.get(1)?.as_str().parse().ok()?,
            minor: caps.get(2)?.as_str().parse().ok()?,
            patch: caps.get(3).and_then(|m| m.as_str().parse().ok()),
        })
    }

    /// Whether this is a Python 3 (or later) interpreter.
    pub fn is_python3(&self) -> bool {
        self.major >= 3
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

/// A usable interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeInfo {
    /// Path (or bare name) used to invoke the interpreter.
    pub interpreter: PathBuf,

    /// Version reported by `--version`, if the banner could be parsed.
    pub version: Option<PythonVersion>,
}

impl RuntimeInfo {
    /// Human-readable description, e.g. `Python 3.12.1 (/usr/bin/python3)`.
    pub fn describe(&self) -> String {
        match &self.version {
            Some(v) => format!("Python {} ({})", v, self.interpreter.display()),
            None => format!("Python ({})", self.interpreter.display()),
        }
    }
}

/// Locates a working Python interpreter.
pub struct RuntimeChecker<'a> {
    runner: &'a dyn CommandRunner,
    path_entries: Vec<PathBuf>,
}

impl<'a> RuntimeChecker<'a> {
    /// Create a checker that searches the system PATH.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self::with_path(runner, parse_system_path())
    }

    /// Create a checker with explicit PATH entries.
    pub fn with_path(runner: &'a dyn CommandRunner, path_entries: Vec<PathBuf>) -> Self {
        Self {
            runner,
            path_entries,
        }
    }

    /// Interpreters to try, in order.
    ///
    /// An explicit interpreter replaces the defaults entirely. Names found
    /// on PATH are returned as full paths; others are left bare so the
    /// operating system gets the final say. Relative paths are made
    /// absolute against the current directory, since later steps run from
    /// the project directory.
    pub fn candidates(&self, explicit: Option<&Path>) -> Vec<PathBuf> {
        match explicit {
            Some(path) => vec![self.resolve(path)],
            None => DEFAULT_INTERPRETERS
                .iter()
                .map(|name| self.resolve(Path::new(name)))
                .collect(),
        }
    }

    fn resolve(&self, interpreter: &Path) -> PathBuf {
        if interpreter.components().count() > 1 {
            return std::path::absolute(interpreter).unwrap_or_else(|e| {
                tracing::debug!("Could not absolutize {}: {}", interpreter.display(), e);
                interpreter.to_path_buf()
            });
        }
        interpreter
            .to_str()
            .and_then(|name| resolve_tool_path(name, &self.path_entries))
            .unwrap_or_else(|| interpreter.to_path_buf())
    }

    /// Find the first candidate whose version query succeeds.
    pub fn check(&self, explicit: Option<&Path>) -> Result<RuntimeInfo> {
        let candidates = self.candidates(explicit);

        for interpreter in &candidates {
            if let Some(banner) = self.query_version(interpreter) {
                let version = PythonVersion::parse(&banner);
                tracing::debug!(
                    "Runtime {} answered version query: {}",
                    interpreter.display(),
                    banner.trim()
                );
                return Ok(RuntimeInfo {
                    interpreter: interpreter.clone(),
                    version,
                });
            }
        }

        Err(LauncherError::RuntimeNotFound {
            interpreter: candidates
                .iter()
                .map(|c| c.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    /// Run `<interpreter> --version`, returning its banner on success.
    ///
    /// Python 2 prints the banner to stderr, so both streams are read.
    fn query_version(&self, interpreter: &Path) -> Option<String> {
        let spec = version_command(interpreter);
        match self.runner.run(&spec, &CommandOptions::captured()) {
            Ok(result) if result.success => Some(result.combined_output()),
            Ok(result) => {
                tracing::debug!(
                    "{} exited with {:?}",
                    spec.display(),
                    result.exit_code
                );
                None
            }
            Err(e) => {
                tracing::debug!("{}", e);
                None
            }
        }
    }
}

/// The version-query command for an interpreter.
pub fn version_command(interpreter: &Path) -> CommandSpec {
    CommandSpec::new(interpreter).arg("--version")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;

    #[test]
    fn parses_full_version_banner() {
        let v = PythonVersion::parse("Python 3.11.4\n").unwrap();
        assert_eq!(
            v,
            PythonVersion {
                major: 3,
                minor: 11,
                patch: Some(4)
            }
        );
        assert_eq!(v.to_string(), "3.11.4");
        assert!(v.is_python3());
    }

    #[test]
    fn parses_banner_without_patch() {
        let v = PythonVersion::parse("Python 3.13").unwrap();
        assert_eq!(v.patch, None);
        assert_eq!(v.to_string(), "3.13");
    }

    #[test]
    fn python2_is_not_python3() {
        let v = PythonVersion::parse("Python 2.7.18").unwrap();
        assert!(!v.is_python3());
    }

    #[test]
    fn unrelated_output_does_not_parse() {
        assert_eq!(PythonVersion::parse("command not found"), None);
    }

    #[cfg(not(windows))]
    #[test]
    fn first_answering_default_wins() {
        let runner = MockRunner::new()
            .on_missing("python --version")
            .on_output("python3 --version", 0, "Python 3.12.1");
        let checker = RuntimeChecker::with_path(&runner, Vec::new());

        let info = checker.check(None).unwrap();

        assert_eq!(info.interpreter, PathBuf::from("python3"));
        assert_eq!(info.version.map(|v| v.minor), Some(12));
    }

    #[test]
    fn non_zero_version_query_is_not_a_runtime() {
        let runner = MockRunner::new().on_exit("--version", 9009);
        let checker = RuntimeChecker::with_path(&runner, Vec::new());

        let err = checker.check(None).unwrap_err();

        assert!(matches!(err, LauncherError::RuntimeNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn explicit_interpreter_replaces_defaults() {
        let runner = MockRunner::new().on_missing("/opt/py/bin/python");
        let checker = RuntimeChecker::with_path(&runner, Vec::new());

        let err = checker.check(Some(Path::new("/opt/py/bin/python"))).unwrap_err();

        assert_eq!(runner.calls(), vec!["/opt/py/bin/python --version"]);
        assert!(err.to_string().contains("/opt/py/bin/python"));
    }

    #[test]
    fn relative_interpreter_becomes_absolute() {
        let runner = MockRunner::new();
        let checker = RuntimeChecker::with_path(&runner, Vec::new());

        let candidates = checker.candidates(Some(Path::new("./venv/python")));

        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].is_absolute());
        assert!(candidates[0].ends_with(Path::new("venv").join("python")));
        assert!(candidates[0].starts_with(std::env::current_dir().unwrap()));
    }

    #[test]
    fn bare_explicit_name_is_not_absolutized() {
        let runner = MockRunner::new();
        let checker = RuntimeChecker::with_path(&runner, Vec::new());

        assert_eq!(
            checker.candidates(Some(Path::new("python3.12"))),
            vec![PathBuf::from("python3.12")]
        );
    }

    #[test]
    fn unparseable_banner_still_counts_as_runtime() {
        let runner = MockRunner::new().on_output("--version", 0, "PyPy something");
        let checker = RuntimeChecker::with_path(&runner, Vec::new());

        let info = checker.check(None).unwrap();

        assert_eq!(info.version, None);
        assert_eq!(info.describe(), "Python (python)");
    }

    #[test]
    fn describe_includes_version_and_path() {
        let info = RuntimeInfo {
            interpreter: PathBuf::from("/usr/bin/python3"),
            version: PythonVersion::parse("Python 3.10.12"),
        };
        assert_eq!(info.describe(), "Python 3.10.12 (/usr/bin/python3)");
    }

    #[cfg(unix)]
    #[test]
    fn candidates_resolve_through_path_entries() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let python3 = temp.path().join("python3");
        std::fs::write(&python3, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&python3, std::fs::Permissions::from_mode(0o755)).unwrap();

        let runner = MockRunner::new();
        let checker = RuntimeChecker::with_path(&runner, vec![temp.path().to_path_buf()]);

        assert_eq!(
            checker.candidates(None),
            vec![PathBuf::from("python"), python3]
        );
    }
}

//! User-facing hint text for each way a launch can end.

use crate::requirements::DOWNLOAD_URL;

/// Hint when no Python interpreter answered the version query.
pub fn runtime_missing() -> String {
    format!(
        "Install Python 3 from {} (tick \"Add Python to PATH\" on Windows), then run this launcher again.",
        DOWNLOAD_URL
    )
}

/// Hint after the batch dependency install failed.
pub fn install_failed() -> &'static str {
    "Check your internet connection and try again."
}

/// Hint when pip or the generator could not be started at all.
pub fn command_unavailable() -> &'static str {
    "Check that the Python interpreter still exists and is executable, then run this launcher again."
}

/// Hint after the generator exited non-zero.
pub fn generation_failed() -> &'static str {
    "Review the output above for the generator's error details."
}

/// Hint when the generator script is not in the working directory.
pub fn script_missing(script: &str) -> String {
    format!(
        "Run the launcher from the folder containing {} or pass --script <PATH>.",
        script
    )
}

/// Hint after a dry run.
pub fn after_dry_run() -> &'static str {
    "Run again without --dry-run to install dependencies and generate the presentation."
}

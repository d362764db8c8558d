//! Execution-context detection.

/// Environment variables set by common CI providers.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()`, which also disables the
/// final keypress pause.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key).is_ok())
}

fn is_ci_with_env<F>(is_set: F) -> bool
where
    F: Fn(&str) -> bool,
{
    CI_VARS.iter().any(|var| is_set(var))
}

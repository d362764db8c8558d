//! The fixed dependency batch and the commands built around it.

use std::path::Path;

use serde::Serialize;

use crate::shell::CommandSpec;

/// Packages the generator imports, installed as one batch. Unpinned.
pub const DEPENDENCIES: &[&str] = &["python-pptx", "matplotlib", "numpy", "Pillow"];

/// `<python> -m pip install --upgrade pip`
pub fn upgrade_pip_command(python: &Path, cwd: &Path) -> CommandSpec {
    CommandSpec::new(python)
        .args(["-m", "pip", "install", "--upgrade", "pip"])
        .current_dir(cwd)
}

/// `<python> -m pip install <DEPENDENCIES...>`
pub fn install_command(python: &Path, cwd: &Path) -> CommandSpec {
    CommandSpec::new(python)
        .args(["-m", "pip", "install"])
        .args(DEPENDENCIES.iter().copied())
        .current_dir(cwd)
}

/// `<python> <script>`, run from the working directory with no arguments.
pub fn generate_command(python: &Path, script: &Path, cwd: &Path) -> CommandSpec {
    CommandSpec::new(python)
        .arg(script.to_string_lossy())
        .current_dir(cwd)
}

/// What a launch installs and runs, for `deps` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyPlan {
    pub packages: Vec<String>,
    pub commands: Vec<String>,
}

impl DependencyPlan {
    /// Build the plan for an interpreter and script.
    pub fn new(python: &Path, script: &Path, cwd: &Path) -> Self {
        Self {
            packages: DEPENDENCIES.iter().map(|p| p.to_string()).collect(),
            commands: vec![
                upgrade_pip_command(python, cwd).display(),
                install_command(python, cwd).display(),
                generate_command(python, script, cwd).display(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_list_is_fixed_and_ordered() {
        assert_eq!(
            DEPENDENCIES,
            &["python-pptx", "matplotlib", "numpy", "Pillow"]
        );
    }

    #[test]
    fn install_is_a_single_batch() {
        let spec = install_command(Path::new("python"), Path::new("."));
        assert_eq!(
            spec.display(),
            "python -m pip install python-pptx matplotlib numpy Pillow"
        );
    }

    #[test]
    fn upgrade_targets_pip_itself() {
        let spec = upgrade_pip_command(Path::new("python3"), Path::new("."));
        assert_eq!(spec.display(), "python3 -m pip install --upgrade pip");
    }

    #[test]
    fn generate_passes_only_the_script() {
        let spec = generate_command(
            Path::new("python"),
            Path::new("nokia_presentation_generator.py"),
            Path::new("/work"),
        );
        assert_eq!(spec.args, vec!["nokia_presentation_generator.py"]);
        assert_eq!(spec.cwd.as_deref(), Some(Path::new("/work")));
    }

    #[test]
    fn plan_lists_packages_and_three_commands() {
        let plan = DependencyPlan::new(Path::new("python"), Path::new("gen.py"), Path::new("."));
        assert_eq!(plan.packages.len(), 4);
        assert_eq!(plan.commands.len(), 3);
        assert_eq!(plan.commands[2], "python gen.py");
    }
}

//! PATH lookup for interpreter candidates.
//!
//! Lookups walk the PATH entries directly instead of shelling out to
//! `which`/`where`, whose behavior differs between systems.

use std::path::{Path, PathBuf};

/// File extensions tried for a bare tool name on Windows.
#[cfg(windows)]
const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "bat", "cmd"];

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for candidate in candidate_files(dir, tool) {
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(windows)]
fn candidate_files(dir: &Path, tool: &str) -> Vec<PathBuf> {
    let mut files = vec![dir.join(tool)];
    files.extend(
        EXECUTABLE_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}.{}", tool, ext))),
    );
    files
}

#[cfg(not(windows))]
fn candidate_files(dir: &Path, tool: &str) -> Vec<PathBuf> {
    vec![dir.join(tool)]
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\necho fake\n").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn create_non_executable_file(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "not executable").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn resolve_tool_path_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first");
        let second = temp.path().join("second");
        create_fake_binary(&first.join("python3"));
        create_fake_binary(&second.join("python3"));

        let found = resolve_tool_path("python3", &[first.clone(), second]);
        assert_eq!(found, Some(first.join("python3")));
    }

    #[test]
    fn resolve_tool_path_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            resolve_tool_path("python", &[temp.path().to_path_buf()]),
            None
        );
    }

    #[test]
    fn resolve_tool_path_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        let plain = temp.path().join("plain");
        let bin = temp.path().join("bin");
        create_non_executable_file(&plain.join("python"));
        create_fake_binary(&bin.join("python"));

        let found = resolve_tool_path("python", &[plain, bin.clone()]);
        assert_eq!(found, Some(bin.join("python")));
    }

    #[test]
    fn is_executable_returns_false_for_nonexistent_file() {
        assert!(!is_executable(Path::new("/nonexistent/python")));
    }

    #[test]
    fn empty_path_resolves_nothing() {
        assert_eq!(resolve_tool_path("python", &[]), None);
    }
}

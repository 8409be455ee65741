//! Git repository fixtures shared by the integration tests.

use anyhow::{Result, bail};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Runs a git subcommand in `repo_path`, failing on a non-zero exit.
pub fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;

    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

/// Initialises an empty repository with a committer identity.
pub fn create_test_repo() -> Result<TempDir> {
    let dir = TempDir::new()?;

    git(dir.path(), &["init", "--quiet"])?;
    git(dir.path(), &["config", "user.name", "Docs Author"])?;
    git(dir.path(), &["config", "user.email", "docs@example.com"])?;

    Ok(dir)
}

/// Stages the whole work tree and commits it.
pub fn commit_all(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["add", "."])?;
    git(repo_path, &["commit", "--quiet", "-m", message])
}

/// Writes raw bytes below `repo_path`, creating parent directories.
pub fn write_bytes(repo_path: &Path, path: &str, content: &[u8]) -> Result<()> {
    let file_path = repo_path.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Writes a text file below `repo_path`, creating parent directories.
pub fn write_file(repo_path: &Path, path: &str, content: &str) -> Result<()> {
    write_bytes(repo_path, path, content.as_bytes())
}

//! Common utility functions for command handlers
//!
//! This module contains shared helper functions used across multiple commands.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use crate::color;
use crate::config::Config;
use crate::domain::remote::RemoteInfo;
use crate::integrations::git::{GitClient, RealGitClient};
use crate::service::LabService;

/// Get the main repository root path
///
/// # Errors
/// Returns an error if:
/// - Not in a git repository
/// - Git command fails
/// - Path canonicalization fails
pub fn get_main_repo_root() -> Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--git-common-dir"])
        .output()
        .context("Failed to execute git rev-parse")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "Not in a git repository. Run lab from within a git repository or pass --repository.\nGit error: {}",
            stderr.trim()
        );
    }

    let git_dir = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let git_path = PathBuf::from(&git_dir);

    let abs_git_path = if git_path.is_absolute() {
        git_path
    } else {
        std::env::current_dir()?.join(git_path).canonicalize()?
    };

    // Parent of .git directory is the repository root
    let repo_root = abs_git_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or(abs_git_path);

    Ok(repo_root)
}

/// Convert a path to home-relative display format
///
/// Returns "~/path" if under home directory, otherwise the path as given
#[must_use]
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(rel) = path.strip_prefix(&home) {
            let rel_str = rel.display().to_string();
            if rel_str.is_empty() {
                return "~".to_string();
            }
            return format!("~/{rel_str}");
        }
    }
    path.display().to_string()
}

/// Load config from the main repository root, or the current directory
/// when not inside a repository
///
/// # Errors
/// Returns an error if a config file exists but cannot be parsed
pub fn load_config() -> Result<Config> {
    get_main_repo_root().map_or_else(|_| Config::load(), |root| Config::load_from_repo_root(&root))
}

/// Service wired to the real git client and loaded config
///
/// # Errors
/// Returns an error if the config cannot be loaded
pub fn real_service() -> Result<LabService<RealGitClient>> {
    Ok(LabService::new(load_config()?, RealGitClient))
}

/// Domain and, unless listing across all projects, the target project
///
/// # Errors
/// Returns an error if the target project is needed but cannot be determined
pub fn list_target<G: GitClient>(
    service: &LabService<G>,
    repository: Option<&str>,
    all_repository: bool,
) -> Result<(String, Option<RemoteInfo>)> {
    if !all_repository {
        let remote = service.remote(repository)?;
        return Ok((remote.domain.clone(), Some(remote)));
    }

    let domain = if repository.is_some() {
        service.config().primary_domain().to_string()
    } else {
        service.domain()
    };
    Ok((domain, None))
}

/// Write `text` followed by a newline unless it is empty
///
/// # Errors
/// Returns an error if `out` cannot be written
pub fn write_block<W: Write>(out: &mut W, text: &str) -> Result<()> {
    if !text.is_empty() {
        writeln!(out, "{text}")?;
    }
    Ok(())
}

/// Run `f` while showing a spinner on stderr
///
/// The spinner is only drawn when colors are enabled and stderr is a terminal.
pub fn with_spinner<T>(
    color_mode: color::ColorMode,
    message: &str,
    f: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let spinner = if color_mode.should_colorize() && std::io::stderr().is_terminal() {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result = f();

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    result
}

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::{Context, Result};
use std::process::Command;

use crate::domain::remote::{parse_remote_url, RemoteInfo};

/// A configured git remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRemote {
    pub name: String,
    pub url: String,
}

/// Git client interface for reading repository metadata
pub trait GitClient {
    /// List remotes in git config order
    fn remotes(&self) -> Result<Vec<GitRemote>>;
}

/// Real git implementation
#[derive(Debug, Default)]
pub struct RealGitClient;

impl GitClient for RealGitClient {
    fn remotes(&self) -> Result<Vec<GitRemote>> {
        let output = Command::new("git")
            .args(["config", "--get-regexp", r"^remote\..*\.url$"])
            .output()
            .context("Failed to execute git config")?;

        // Exit code 1 means no matching keys
        if output.status.code() == Some(1) {
            return Ok(Vec::new());
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git config --get-regexp failed: {}", stderr.trim());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_remote_config(&stdout))
    }
}

/// Parse `git config --get-regexp '^remote\..*\.url$'` output
///
/// Each line looks like `remote.origin.url git@gitlab.com:group/project.git`.
/// Remote names may themselves contain dots.
pub fn parse_remote_config(output: &str) -> Vec<GitRemote> {
    output
        .lines()
        .filter_map(|line| {
            let (key, url) = line.trim().split_once(char::is_whitespace)?;
            let name = key.strip_prefix("remote.")?.strip_suffix(".url")?;
            Some(GitRemote {
                name: name.to_string(),
                url: url.trim().to_string(),
            })
        })
        .collect()
}

/// Pick the remote pointing at one of the preferred domains
///
/// Among matching remotes `origin` wins; otherwise the first in git order.
pub fn select_remote(remotes: &[GitRemote], preferred_domains: &[String]) -> Option<RemoteInfo> {
    let candidates: Vec<(&GitRemote, RemoteInfo)> = remotes
        .iter()
        .filter_map(|remote| parse_remote_url(&remote.url).map(|info| (remote, info)))
        .filter(|(_, info)| preferred_domains.iter().any(|d| d == &info.domain))
        .collect();

    candidates
        .iter()
        .find(|(remote, _)| remote.name == "origin")
        .or_else(|| candidates.first())
        .map(|(_, info)| info.clone())
}

//! Configuration loading logic

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::schema::{Config, LocalConfig};

/// Environment variable holding an access token for any domain
pub const TOKEN_ENV: &str = "GITLAB_TOKEN";

const LOCAL_CONFIG_FILE: &str = ".lab.toml";

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        read_toml(path)
    }

    /// Global config with `.lab.toml` from the current directory laid over it
    ///
    /// Used outside of git repositories.
    ///
    /// # Errors
    /// Returns an error if an existing config file cannot be read or parsed
    pub fn load() -> Result<Self> {
        Self::load_layered(&Self::local_config_path())
    }

    /// Global config with `.lab.toml` from `repo_root` laid over it
    ///
    /// Every subdirectory and linked worktree resolves to the same root, so
    /// they all share one local file.
    ///
    /// # Errors
    /// Returns an error if an existing config file cannot be read or parsed
    pub fn load_from_repo_root(repo_root: &Path) -> Result<Self> {
        Self::load_layered(&Self::local_config_path_from(repo_root))
    }

    /// The global file, or defaults when there is none
    fn load_global() -> Result<Self> {
        match Self::global_config_path().filter(|path| path.is_file()) {
            Some(global) => {
                tracing::debug!(path = %global.display(), "using global config");
                Self::from_file(&global)
            }
            None => {
                tracing::debug!("no global config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Global settings with the keys present in `local` laid over them
    fn load_layered(local: &Path) -> Result<Self> {
        let global = Self::load_global()?;
        if !local.is_file() {
            return Ok(global);
        }

        tracing::debug!(path = %local.display(), "applying local config");
        let overrides: LocalConfig = read_toml(local)?;
        Ok(global.with_local(overrides))
    }

    /// `.lab.toml` inside `repo_root`
    #[must_use]
    pub fn local_config_path_from(repo_root: &Path) -> PathBuf {
        repo_root.join(LOCAL_CONFIG_FILE)
    }

    /// `.lab.toml` relative to the current directory
    #[must_use]
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG_FILE)
    }

    /// Get the global config path
    /// Respects `XDG_CONFIG_HOME` environment variable on all platforms.
    /// Fallback: `$HOME/.config/lab/config.toml`
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;

        Some(config_home.join("lab").join("config.toml"))
    }

    /// Resolve the access token for a domain
    ///
    /// `GITLAB_TOKEN` wins over the `[tokens]` table.
    ///
    /// # Errors
    /// Returns an error naming the domain when no token is configured
    pub fn token_for(&self, domain: &str) -> Result<String> {
        self.token_for_with_env(domain, std::env::var(TOKEN_ENV).ok())
    }

    pub(crate) fn token_for_with_env(
        &self,
        domain: &str,
        env_token: Option<String>,
    ) -> Result<String> {
        if let Some(token) = env_token.filter(|t| !t.trim().is_empty()) {
            return Ok(token.trim().to_string());
        }

        if let Some(token) = self.tokens.get(domain).filter(|t| !t.trim().is_empty()) {
            return Ok(token.trim().to_string());
        }

        let location = Self::global_config_path().map_or_else(
            || "the global config".to_string(),
            |path| path.display().to_string(),
        );
        anyhow::bail!(
            "No access token for {domain}. Set {TOKEN_ENV} or add \"{domain}\" under [tokens] in {location}"
        )
    }
}

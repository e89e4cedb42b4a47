//! Init command - Write starter config files

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::color;
use crate::commands::common::{display_path, get_main_repo_root};
use crate::config::{Config, TOKEN_ENV};

/// Which config file to write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigScope {
    Global,
    Local,
}

impl ConfigScope {
    /// Scopes selected by `--global` / `--local`; both when neither is given
    fn selected(global: bool, local: bool) -> Vec<Self> {
        match (global, local) {
            (true, false) => vec![Self::Global],
            (false, true) => vec![Self::Local],
            _ => vec![Self::Global, Self::Local],
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Local => "Local",
        }
    }

    const fn template(self) -> &'static str {
        match self {
            Self::Global => Config::template_global(),
            Self::Local => Config::template_local(),
        }
    }

    fn path(self) -> Result<PathBuf> {
        match self {
            Self::Global => Config::global_config_path().context(
                "Could not determine global config path (HOME directory not found). \
                 Set HOME or XDG_CONFIG_HOME.",
            ),
            // The local file lives at the repository root so every subdirectory shares it
            Self::Local => Ok(get_main_repo_root().map_or_else(
                |_| Config::local_config_path(),
                |root| Config::local_config_path_from(&root),
            )),
        }
    }
}

/// Write `scope`'s template to `path`; returns whether a file was written
fn write_template(
    path: &Path,
    scope: ConfigScope,
    force: bool,
    color_mode: color::ColorMode,
) -> Result<bool> {
    let label = scope.label();
    let shown = display_path(path);

    if path.exists() && !force {
        eprintln!(
            "{}",
            color::warn(color_mode, format!("{label} config already exists: {shown}"))
        );
        eprintln!("{}", color::dim(color_mode, "Use --force to overwrite"));
        return Ok(false);
    }

    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
    }
    std::fs::write(path, scope.template())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    eprintln!(
        "{}",
        color::success(color_mode, format!("Created {label} config: {shown}"))
    );
    if scope == ConfigScope::Global {
        eprintln!(
            "{}",
            color::dim(
                color_mode,
                format!("Add an access token under [tokens] or set {TOKEN_ENV}")
            )
        );
    }
    Ok(true)
}

/// Write the global and/or local config templates
///
/// # Errors
/// Returns an error if the global config path cannot be determined or a
/// file cannot be written
pub fn cmd_init(global: bool, local: bool, force: bool, color_mode: color::ColorMode) -> Result<()> {
    for scope in ConfigScope::selected(global, local) {
        let path = scope.path()?;
        write_template(&path, scope, force, color_mode)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_scopes() {
        assert_eq!(
            ConfigScope::selected(false, false),
            vec![ConfigScope::Global, ConfigScope::Local]
        );
        assert_eq!(ConfigScope::selected(true, false), vec![ConfigScope::Global]);
        assert_eq!(ConfigScope::selected(false, true), vec![ConfigScope::Local]);
    }

    #[test]
    fn test_write_template_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/lab/config.toml");

        let written =
            write_template(&path, ConfigScope::Global, false, color::ColorMode::Never).unwrap();

        assert!(written);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[tokens]"));
    }

    #[test]
    fn test_write_template_keeps_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".lab.toml");
        std::fs::write(&path, "# mine").unwrap();

        let written =
            write_template(&path, ConfigScope::Local, false, color::ColorMode::Never).unwrap();

        assert!(!written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");
    }

    #[test]
    fn test_write_template_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".lab.toml");
        std::fs::write(&path, "# mine").unwrap();

        write_template(&path, ConfigScope::Local, true, color::ColorMode::Never).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("lab project configuration"));
        assert!(!content.contains("[tokens]"));
    }
}

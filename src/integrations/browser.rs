#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Launchers tried in order on systems other than macOS and Windows
const UNIX_CANDIDATES: &[&str] = &[
    "xdg-open",
    "cygstart",
    "x-www-browser",
    "firefox",
    "opera",
    "mozilla",
    "netscape",
];

/// Default launcher on Windows
const WINDOWS_START: &str = "cmd /c start";

/// Browser launcher interface
pub trait Browser {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs with a configured command or the platform default
#[derive(Debug)]
pub struct RealBrowser {
    launcher: Option<String>,
}

impl RealBrowser {
    /// Use `configured` when set, otherwise `BROWSER`, otherwise detect per OS
    pub fn new(configured: Option<&str>) -> Self {
        let launcher = configured
            .map(ToString::to_string)
            .or_else(|| std::env::var("BROWSER").ok())
            .filter(|l| !l.trim().is_empty())
            .or_else(|| search_browser_launcher(std::env::consts::OS));
        Self { launcher }
    }
}

impl Browser for RealBrowser {
    fn open(&self, url: &str) -> Result<()> {
        let Some(launcher) = &self.launcher else {
            anyhow::bail!("No browser launcher found. Set `browser` in the config or the BROWSER environment variable");
        };

        let (program, args) = launch_command(launcher, url).context("Browser launcher is empty")?;
        tracing::debug!(%program, ?args, "opening browser");

        Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to launch browser: {launcher}"))?;

        Ok(())
    }
}

/// Pick the command that opens URLs on `os` (a `std::env::consts::OS` value)
pub fn search_browser_launcher(os: &str) -> Option<String> {
    match os {
        "macos" => Some("open".to_string()),
        "windows" => Some(WINDOWS_START.to_string()),
        _ => {
            let path = std::env::var_os("PATH")?;
            let dirs: Vec<PathBuf> = std::env::split_paths(&path).collect();
            UNIX_CANDIDATES
                .iter()
                .find_map(|name| find_executable(name, &dirs))
                .map(|p| p.display().to_string())
        }
    }
}

/// Program and arguments that open `url` with `launcher`
///
/// The launcher may carry its own arguments (`firefox --new-tab`). For
/// `cmd /c start` an empty window title is passed first and cmd's
/// metacharacters in the URL are caret-escaped, so `&` in a query string
/// does not end the command.
pub fn launch_command(launcher: &str, url: &str) -> Option<(String, Vec<String>)> {
    let mut parts = launcher.split_whitespace().map(ToString::to_string);
    let program = parts.next()?;
    let mut args: Vec<String> = parts.collect();

    if launcher.trim().eq_ignore_ascii_case(WINDOWS_START) {
        args.push(String::new());
        args.push(escape_for_cmd(url));
    } else {
        args.push(url.to_string());
    }
    Some((program, args))
}

fn escape_for_cmd(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '&' | '|' | '<' | '>' | '^' | '(' | ')') {
            escaped.push('^');
        }
        escaped.push(c);
    }
    escaped
}

fn find_executable(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

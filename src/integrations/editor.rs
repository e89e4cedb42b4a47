#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::{Context, Result};
use std::io::Write;
use std::process::Command;

/// Text editor interface for composing messages
pub trait Editor {
    /// Open `initial` in an editor and return the saved content
    fn edit(&self, initial: &str) -> Result<String>;
}

/// Editor launched from `GIT_EDITOR`, `core.editor`, `VISUAL` or `EDITOR`
#[derive(Debug)]
pub struct RealEditor {
    /// File name prefix for the scratch file (e.g. `ISSUE_EDITMSG`)
    file_prefix: String,
}

impl RealEditor {
    pub fn new(file_prefix: impl Into<String>) -> Self {
        Self {
            file_prefix: file_prefix.into(),
        }
    }
}

impl Editor for RealEditor {
    fn edit(&self, initial: &str) -> Result<String> {
        let mut file = tempfile::Builder::new()
            .prefix(&format!("{}-", self.file_prefix))
            .suffix(".md")
            .tempfile()
            .context("Failed to create message file")?;
        file.write_all(initial.as_bytes())
            .context("Failed to write message file")?;
        file.flush().context("Failed to flush message file")?;

        let editor = editor_command();
        tracing::debug!(%editor, path = %file.path().display(), "launching editor");

        let status = shell_command(&editor, file.path())
            .status()
            .with_context(|| format!("Failed to launch editor: {editor}"))?;

        if !status.success() {
            anyhow::bail!("Editor exited with {status}");
        }

        // The scratch file is removed when `file` is dropped
        std::fs::read_to_string(file.path()).context("Failed to read message file")
    }
}

/// Resolve the editor command the way git does
fn editor_command() -> String {
    let from_git = Command::new("git")
        .args(["var", "GIT_EDITOR"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|editor| !editor.is_empty());

    from_git
        .or_else(|| std::env::var("VISUAL").ok().filter(|v| !v.is_empty()))
        .or_else(|| std::env::var("EDITOR").ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "vi".to_string())
}

#[cfg(unix)]
fn shell_command(editor: &str, path: &std::path::Path) -> Command {
    // Editor values may carry arguments, e.g. "code --wait"
    let mut cmd = Command::new("sh");
    cmd.arg("-c")
        .arg(format!("{editor} \"$@\""))
        .arg(editor)
        .arg(path);
    cmd
}

#[cfg(not(unix))]
fn shell_command(editor: &str, path: &std::path::Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(editor).arg(path);
    cmd
}

/// Initial editor content for a new issue
pub fn issue_message(title: &str, description: &str) -> String {
    format!(
        "<!-- Write a message for this issue. The first block of text is the title -->\n\
         {title}\n\
         \n\
         <!-- the rest is the description.  -->\n\
         {description}\n"
    )
}

/// Split edited text into title and description
///
/// Lines that are HTML comments are dropped. The first block of non-blank
/// lines becomes the title (joined with spaces); the remainder, trimmed,
/// is the description.
pub fn parse_title_and_description(text: &str) -> (String, String) {
    let lines: Vec<&str> = text
        .lines()
        .filter(|line| !is_comment_line(line))
        .collect();

    let mut rest = lines.iter().skip_while(|line| line.trim().is_empty());
    let mut title_lines = Vec::new();
    for line in rest.by_ref() {
        if line.trim().is_empty() {
            break;
        }
        title_lines.push(line.trim());
    }

    let description = rest.copied().collect::<Vec<_>>().join("\n");
    (title_lines.join(" "), description.trim().to_string())
}

fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("<!--") && trimmed.ends_with("-->")
}

/// Open the issue template in `editor` and parse the result
pub fn edit_title_and_description<E: Editor>(
    editor: &E,
    title: &str,
    description: &str,
) -> Result<(String, String)> {
    let edited = editor.edit(&issue_message(title, description))?;
    Ok(parse_title_and_description(&edited))
}

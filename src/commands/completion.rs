//! Completion command - Print shell completion setup instructions

use anyhow::Result;
use clap_complete::Shell;

const BIN_NAME: &str = "lab";

/// Setup snippet for a shell's rc file
///
/// Returns `None` for shells without dynamic completion support.
#[must_use]
pub fn completion_instructions(shell: Shell) -> Option<String> {
    let (rc_file, source_line) = match shell {
        Shell::Bash => ("~/.bashrc", format!("source <(COMPLETE=bash {BIN_NAME})")),
        Shell::Zsh => ("~/.zshrc", format!("source <(COMPLETE=zsh {BIN_NAME})")),
        Shell::Fish => (
            "~/.config/fish/config.fish",
            format!("source (COMPLETE=fish {BIN_NAME} | psub)"),
        ),
        _ => return None,
    };

    Some(format!(
        "# {BIN_NAME} shell completion setup for {shell}\n# Add this to your {rc_file}:\n{source_line}\n"
    ))
}

/// Print shell completion setup instructions
///
/// # Errors
/// Returns an error if the shell is unknown or unsupported
pub fn cmd_completion(shell: &str) -> Result<()> {
    let parsed = shell.parse::<Shell>().map_err(|_| {
        anyhow::anyhow!("Invalid shell: {shell}. Supported shells: bash, zsh, fish")
    })?;

    let Some(instructions) = completion_instructions(parsed) else {
        anyhow::bail!("Unsupported shell: {shell}");
    };

    print!("{instructions}");
    Ok(())
}

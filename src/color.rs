use std::env;
use std::fmt;

use owo_colors::OwoColorize;

/// When to color stderr output
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum ColorMode {
    /// Always use colors
    Always,
    /// Color when stderr supports it
    #[default]
    Auto,
    /// Never use colors
    Never,
}

/// `NO_COLOR` set to anything, or `TERM=dumb`
fn env_disables_color() -> bool {
    env::var_os("NO_COLOR").is_some() || env::var("TERM").is_ok_and(|term| term == "dumb")
}

impl ColorMode {
    /// Resolve the effective mode
    ///
    /// An explicit `--color` wins; otherwise `NO_COLOR` or `TERM=dumb`
    /// turn colors off, and everything else is `Auto`.
    #[must_use]
    pub fn resolve(cli_mode: Option<Self>) -> Self {
        match cli_mode {
            Some(mode) => mode,
            None if env_disables_color() => Self::Never,
            None => Self::Auto,
        }
    }

    /// Whether stderr output gets ANSI styling
    ///
    /// stdout carries the column listings and URLs meant for pipes and is
    /// never styled.
    #[must_use]
    pub fn should_colorize(self) -> bool {
        match self {
            Self::Always => true,
            Self::Auto => supports_color::on_cached(supports_color::Stream::Stderr).is_some(),
            Self::Never => false,
        }
    }
}

/// Kind of status line printed on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Info,
    Warn,
    Error,
}

impl Status {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Info => "ℹ",
            Self::Warn => "⚠",
            Self::Error => "✗",
        }
    }

    fn write_symbol(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.symbol();
        match self {
            Self::Success => write!(f, "{}", symbol.bright_green().bold()),
            Self::Info => write!(f, "{}", symbol.bright_cyan()),
            Self::Warn => write!(f, "{}", symbol.bright_yellow()),
            Self::Error => write!(f, "{}", symbol.bright_red().bold()),
        }
    }
}

/// A status symbol followed by a message
pub struct StatusLine<D> {
    status: Status,
    mode: ColorMode,
    message: D,
}

impl<D: fmt::Display> fmt::Display for StatusLine<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode.should_colorize() {
            self.status.write_symbol(f)?;
        } else {
            f.write_str(self.status.symbol())?;
        }
        write!(f, " {}", self.message)
    }
}

#[allow(clippy::missing_const_for_fn)]
fn status_line<D: fmt::Display>(status: Status, mode: ColorMode, message: D) -> StatusLine<D> {
    StatusLine {
        status,
        mode,
        message,
    }
}

/// `✓ message`
pub fn success<D: fmt::Display>(mode: ColorMode, message: D) -> StatusLine<D> {
    status_line(Status::Success, mode, message)
}

/// `ℹ message`
pub fn info<D: fmt::Display>(mode: ColorMode, message: D) -> StatusLine<D> {
    status_line(Status::Info, mode, message)
}

/// `⚠ message`
pub fn warn<D: fmt::Display>(mode: ColorMode, message: D) -> StatusLine<D> {
    status_line(Status::Warn, mode, message)
}

/// `✗ message`, used for the final error before exiting
pub fn error<D: fmt::Display>(mode: ColorMode, message: D) -> StatusLine<D> {
    status_line(Status::Error, mode, message)
}

#[derive(Debug, Clone, Copy)]
enum Accent {
    Dim,
    Link,
}

/// Text styled without a status symbol
pub struct Accented<D> {
    accent: Accent,
    mode: ColorMode,
    text: D,
}

impl<D: fmt::Display> fmt::Display for Accented<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mode.should_colorize() {
            return write!(f, "{}", self.text);
        }
        let text = self.text.to_string();
        match self.accent {
            Accent::Dim => write!(f, "{}", text.dimmed()),
            Accent::Link => write!(f, "{}", text.cyan().underline()),
        }
    }
}

/// Secondary hints such as "Use --force to overwrite"
#[allow(clippy::missing_const_for_fn)]
pub fn dim<D: fmt::Display>(mode: ColorMode, text: D) -> Accented<D> {
    Accented {
        accent: Accent::Dim,
        mode,
        text,
    }
}

/// A GitLab web URL
#[allow(clippy::missing_const_for_fn)]
pub fn link<D: fmt::Display>(mode: ColorMode, url: D) -> Accented<D> {
    Accented {
        accent: Accent::Link,
        mode,
        text: url,
    }
}

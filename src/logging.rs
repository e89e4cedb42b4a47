//! Diagnostic logging on stderr

use tracing_subscriber::{fmt, EnvFilter};

use crate::color::ColorMode;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "LAB_LOG";

const DEFAULT_FILTER: &str = "warn";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// Does nothing if a subscriber is already installed.
pub fn init(color_mode: ColorMode) {
    let _ = fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_ansi(color_mode.should_colorize())
        .with_target(false)
        .try_init();
}

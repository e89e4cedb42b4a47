//! Browse command - Open the project, an issue or a merge request in a browser

use anyhow::Result;
use std::io::Write;

use crate::color;
use crate::commands::common::real_service;
use crate::domain::reference::{split_prefix_and_number, BrowseType};
use crate::domain::remote::RemoteInfo;
use crate::integrations::browser::{Browser, RealBrowser};

/// URL of the project page or of one item
#[must_use]
pub fn browse_url(remote: &RemoteInfo, target: Option<(BrowseType, u64)>) -> String {
    target.map_or_else(
        || remote.web_url(),
        |(browse_type, number)| remote.item_url(browse_type, number),
    )
}

/// Open `url` with `browser`, or write it to `out` when `print_only` is set
///
/// # Errors
/// Returns an error if the browser cannot be launched or `out` cannot be written
pub fn open_or_print<B: Browser, W: Write>(
    url: &str,
    print_only: bool,
    browser: &B,
    out: &mut W,
) -> Result<()> {
    if print_only {
        writeln!(out, "{url}")?;
    } else {
        browser.open(url)?;
    }
    Ok(())
}

/// Open the project, an issue or a merge request in a browser
///
/// The reference is resolved before git or the config are touched, so a
/// malformed argument fails fast.
///
/// # Errors
/// Returns an error if:
/// - The reference is malformed
/// - No target project can be determined
/// - The browser cannot be launched
pub fn cmd_browse(
    reference: Option<&str>,
    print_only: bool,
    repository: Option<&str>,
    color_mode: color::ColorMode,
) -> Result<()> {
    let target = reference.map(split_prefix_and_number).transpose()?;

    let service = real_service()?;
    let remote = service.remote(repository)?;
    let url = browse_url(&remote, target);

    let browser = RealBrowser::new(service.config().browser.as_deref());
    open_or_print(&url, print_only, &browser, &mut std::io::stdout().lock())?;

    if !print_only {
        eprintln!(
            "{}",
            color::info(color_mode, format!("Opening {}", color::link(color_mode, &url)))
        );
    }

    Ok(())
}

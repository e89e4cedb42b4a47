//! Add issue command - Create an issue in the current project

use anyhow::Result;
use std::io::Write;

use crate::cli::AddIssueArgs;
use crate::color;
use crate::commands::common::{real_service, with_spinner};
use crate::domain::remote::RemoteInfo;
use crate::integrations::editor::{edit_title_and_description, Editor, RealEditor};
use crate::integrations::gitlab::{CreateIssueOptions, Issue, LabClient};

/// Title and description from flags, falling back to the editor when
/// either is missing
///
/// Returns `None` when the resulting title is empty.
///
/// # Errors
/// Returns an error if the editor fails
pub fn compose_issue<E: Editor>(args: &AddIssueArgs, editor: &E) -> Result<Option<(String, String)>> {
    let (title, description) = match (&args.title, &args.description) {
        (Some(title), Some(description)) if !title.is_empty() && !description.is_empty() => {
            (title.clone(), description.clone())
        }
        (title, description) => edit_title_and_description(
            editor,
            title.as_deref().unwrap_or_default(),
            description.as_deref().unwrap_or_default(),
        )?,
    };

    if title.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some((title, description)))
}

/// Request body carrying every flag the user gave
#[must_use]
pub fn create_issue_options(
    args: &AddIssueArgs,
    title: String,
    description: String,
) -> CreateIssueOptions {
    CreateIssueOptions {
        title,
        description: Some(description).filter(|d| !d.is_empty()),
        assignee_ids: args.assignee_id.map(|id| vec![id]),
        milestone_id: args.milestone_id,
        labels: args.labels.clone().filter(|l| !l.is_empty()),
    }
}

/// Create the issue and print its reference (`#iid`)
///
/// # Errors
/// Returns an error if the API call fails or `out` cannot be written
pub fn submit_issue<C: LabClient + ?Sized, W: Write>(
    client: &C,
    remote: &RemoteInfo,
    options: &CreateIssueOptions,
    out: &mut W,
) -> Result<Issue> {
    let issue = client.create_issue(&remote.api_project_id(), options)?;
    writeln!(out, "#{}", issue.iid)?;
    Ok(issue)
}

/// Create an issue
///
/// # Errors
/// Returns an error if:
/// - No target project or token can be determined
/// - The editor fails
/// - The API call fails
pub fn cmd_add_issue(args: &AddIssueArgs, color_mode: color::ColorMode) -> Result<()> {
    let service = real_service()?;
    let remote = service.remote(args.repository.repository.as_deref())?;
    let client = service.client(&remote.domain)?;

    let Some((title, description)) = compose_issue(args, &RealEditor::new("ISSUE_EDITMSG"))? else {
        eprintln!(
            "{}",
            color::warn(color_mode, "Aborting issue creation due to empty title")
        );
        return Ok(());
    };

    let options = create_issue_options(args, title, description);
    let mut out = Vec::new();
    let issue = with_spinner(color_mode, "Creating issue...", || {
        submit_issue(&client, &remote, &options, &mut out)
    })?;

    std::io::stdout().write_all(&out)?;
    if !issue.web_url.is_empty() {
        eprintln!("{}", color::link(color_mode, &issue.web_url));
    }
    Ok(())
}

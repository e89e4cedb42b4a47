//! Merge request command - List merge requests of a project or of all projects

use anyhow::Result;
use std::io::Write;

use crate::cli::SearchArgs;
use crate::color;
use crate::commands::common::{list_target, real_service, with_spinner, write_block};
use crate::domain::columns::{columnize, row};
use crate::domain::remote::{repository_full_name_from_web_url, RemoteInfo};
use crate::integrations::gitlab::{LabClient, ListOptions, MergeRequest};

/// Rows for the merge request table
///
/// Across all projects the project path is added as a middle column.
#[must_use]
pub fn merge_request_rows(merge_requests: &[MergeRequest], with_project: bool) -> Vec<String> {
    merge_requests
        .iter()
        .map(|mr| {
            let reference = format!("!{}", mr.iid);
            if with_project {
                row(&[
                    reference,
                    repository_full_name_from_web_url(&mr.web_url),
                    mr.title.clone(),
                ])
            } else {
                row(&[reference, mr.title.clone()])
            }
        })
        .collect()
}

/// Fetch merge requests for one project, or all projects when `remote` is `None`
///
/// # Errors
/// Returns an error if the API call fails
pub fn fetch_merge_requests<C: LabClient + ?Sized>(
    client: &C,
    remote: Option<&RemoteInfo>,
    options: &ListOptions,
) -> Result<Vec<MergeRequest>> {
    match remote {
        Some(remote) => client.list_project_merge_requests(&remote.api_project_id(), options),
        None => client.list_merge_requests(options),
    }
}

/// Fetch and print merge requests as aligned columns
///
/// # Errors
/// Returns an error if the API call fails or `out` cannot be written
pub fn run_merge_request<C: LabClient + ?Sized, W: Write>(
    client: &C,
    remote: Option<&RemoteInfo>,
    options: &ListOptions,
    out: &mut W,
) -> Result<usize> {
    let merge_requests = fetch_merge_requests(client, remote, options)?;
    let rows = merge_request_rows(&merge_requests, remote.is_none());
    write_block(out, &columnize(&rows))?;
    Ok(merge_requests.len())
}

/// List merge requests
///
/// # Errors
/// Returns an error if:
/// - No target project or token can be determined
/// - The API call fails
pub fn cmd_merge_request(
    search: &SearchArgs,
    repository: Option<&str>,
    color_mode: color::ColorMode,
) -> Result<()> {
    let service = real_service()?;
    let (domain, remote) = list_target(&service, repository, search.all_repository)?;
    let client = service.client(&domain)?;
    let options = search.list_options();

    let mut out = Vec::new();
    let count = with_spinner(color_mode, "Fetching merge requests...", || {
        run_merge_request(&client, remote.as_ref(), &options, &mut out)
    })?;

    std::io::stdout().write_all(&out)?;
    if count == 0 {
        eprintln!("{}", color::info(color_mode, "No merge requests found"));
    }
    Ok(())
}

//! Issue command - List issues of a project or of all projects

use anyhow::Result;
use std::io::Write;

use crate::cli::SearchArgs;
use crate::color;
use crate::commands::common::{list_target, real_service, with_spinner, write_block};
use crate::domain::columns::{columnize, row};
use crate::domain::remote::{repository_full_name_from_web_url, RemoteInfo};
use crate::integrations::gitlab::{Issue, LabClient, ListOptions, State};

#[must_use]
pub fn issue_rows(issues: &[Issue], with_project: bool) -> Vec<String> {
    issues
        .iter()
        .map(|issue| {
            let reference = format!("#{}", issue.iid);
            if with_project {
                row(&[
                    reference,
                    repository_full_name_from_web_url(&issue.web_url),
                    issue.title.clone(),
                ])
            } else {
                row(&[reference, issue.title.clone()])
            }
        })
        .collect()
}

/// Issues have no merged state
fn check_state(options: &ListOptions) -> Result<()> {
    if options.state == State::Merged {
        anyhow::bail!("--state merged is only valid for merge requests");
    }
    Ok(())
}

/// Fetch and print issues as aligned columns
///
/// # Errors
/// Returns an error if the state filter is not valid for issues, the API
/// call fails, or `out` cannot be written
pub fn run_issue<C: LabClient + ?Sized, W: Write>(
    client: &C,
    remote: Option<&RemoteInfo>,
    options: &ListOptions,
    out: &mut W,
) -> Result<usize> {
    check_state(options)?;

    let issues = match remote {
        Some(remote) => client.list_project_issues(&remote.api_project_id(), options)?,
        None => client.list_issues(options)?,
    };
    write_block(out, &columnize(&issue_rows(&issues, remote.is_none())))?;
    Ok(issues.len())
}

/// List issues
///
/// # Errors
/// Returns an error if:
/// - No target project or token can be determined
/// - The API call fails
pub fn cmd_issue(
    search: &SearchArgs,
    repository: Option<&str>,
    color_mode: color::ColorMode,
) -> Result<()> {
    let options = search.list_options();
    // Before config and token lookup
    check_state(&options)?;

    let service = real_service()?;
    let (domain, remote) = list_target(&service, repository, search.all_repository)?;
    let client = service.client(&domain)?;

    let mut out = Vec::new();
    let count = with_spinner(color_mode, "Fetching issues...", || {
        run_issue(&client, remote.as_ref(), &options, &mut out)
    })?;

    std::io::stdout().write_all(&out)?;
    if count == 0 {
        eprintln!("{}", color::info(color_mode, "No issues found"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::gitlab::MockLabClient;

    fn issues() -> Vec<Issue> {
        vec![
            Issue {
                iid: 7,
                title: "Crash on start".to_string(),
                web_url: "https://gitlab.com/group/project/issues/7".to_string(),
                state: "opened".to_string(),
            },
            Issue {
                iid: 12,
                title: "Typo\nin docs".to_string(),
                web_url: "https://gitlab.com/group/sub/docs/-/issues/12".to_string(),
                state: "opened".to_string(),
            },
        ]
    }

    #[test]
    fn test_rows_for_project() {
        assert_eq!(
            issue_rows(&issues(), false),
            vec!["#7|Crash on start", "#12|Typoin docs"]
        );
    }

    #[test]
    fn test_rows_for_all_projects() {
        assert_eq!(
            issue_rows(&issues(), true),
            vec![
                "#7|group/project|Crash on start",
                "#12|group/sub/docs|Typoin docs"
            ]
        );
    }

    #[test]
    fn test_run_project_scope() {
        let client = MockLabClient::new().with_issues(issues());
        let remote = RemoteInfo::new("gitlab.com", "group", "project");
        let mut out = Vec::new();

        let count = run_issue(&client, Some(&remote), &ListOptions::default(), &mut out).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "#7   Crash on start\n#12  Typoin docs\n"
        );
        assert_eq!(
            *client.calls.borrow(),
            vec!["list_project_issues group%2Fproject"]
        );
    }

    #[test]
    fn test_run_all_projects() {
        let client = MockLabClient::new().with_issues(issues());
        let mut out = Vec::new();
        run_issue(&client, None, &ListOptions::default(), &mut out).unwrap();
        assert_eq!(*client.calls.borrow(), vec!["list_issues"]);
        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with("#7   group/project   Crash on start\n"));
    }

    #[test]
    fn test_merged_state_rejected() {
        let client = MockLabClient::new();
        let options = ListOptions {
            state: State::Merged,
            ..ListOptions::default()
        };
        let mut out = Vec::new();
        let err = run_issue(&client, None, &options, &mut out).unwrap_err();
        assert!(err.to_string().contains("merged"));
        assert!(client.calls.borrow().is_empty());
    }

    #[test]
    fn test_check_state_allows_issue_states() {
        for state in [State::Opened, State::Closed, State::All] {
            let options = ListOptions {
                state,
                ..ListOptions::default()
            };
            assert!(check_state(&options).is_ok());
        }
    }
}

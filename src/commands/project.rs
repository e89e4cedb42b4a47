//! Project command - List projects visible to the user

use anyhow::Result;
use std::io::Write;

use crate::cli::ProjectArgs;
use crate::color;
use crate::commands::common::{real_service, with_spinner, write_block};
use crate::domain::columns::{columnize, row};
use crate::integrations::gitlab::{LabClient, Project, ProjectListOptions};

#[must_use]
pub fn project_rows(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .map(|project| {
            row(&[
                project.display_name(),
                project.description.clone().unwrap_or_default(),
            ])
        })
        .collect()
}

/// Fetch and print projects as aligned columns
///
/// # Errors
/// Returns an error if the API call fails or `out` cannot be written
pub fn run_project<C: LabClient + ?Sized, W: Write>(
    client: &C,
    options: &ProjectListOptions,
    out: &mut W,
) -> Result<usize> {
    let projects = client.list_projects(options)?;
    write_block(out, &columnize(&project_rows(&projects)))?;
    Ok(projects.len())
}

/// List projects
///
/// # Errors
/// Returns an error if no token is configured or the API call fails
pub fn cmd_project(args: &ProjectArgs, color_mode: color::ColorMode) -> Result<()> {
    let service = real_service()?;
    let client = service.client(&service.domain())?;
    let options = args.list_options();

    let mut out = Vec::new();
    let count = with_spinner(color_mode, "Fetching projects...", || {
        run_project(&client, &options, &mut out)
    })?;

    std::io::stdout().write_all(&out)?;
    if count == 0 {
        eprintln!("{}", color::info(color_mode, "No projects found"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::gitlab::{MockLabClient, ProjectNamespace};

    fn project(namespace: &str, name: &str, description: Option<&str>) -> Project {
        Project {
            name: name.to_string(),
            namespace: ProjectNamespace {
                name: namespace.to_string(),
                full_path: namespace.to_string(),
            },
            description: description.map(ToString::to_string),
            web_url: String::new(),
        }
    }

    #[test]
    fn test_run_project_output() {
        let client = MockLabClient::new().with_projects(vec![
            project("namespace1", "name1", Some("description1\ndescription1")),
            project("namespace2", "name2", Some("description2\ndescription2")),
        ]);
        let mut out = Vec::new();

        run_project(&client, &ProjectListOptions::default(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "namespace1/name1  description1description1\nnamespace2/name2  description2description2\n"
        );
    }

    #[test]
    fn test_run_project_without_description() {
        let client = MockLabClient::new().with_projects(vec![
            project("tools", "lab", None),
            project("tools", "other", Some("Other tool")),
        ]);
        let mut out = Vec::new();

        run_project(&client, &ProjectListOptions::default(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "tools/lab\ntools/other  Other tool\n"
        );
    }

    #[test]
    fn test_run_project_forwards_options() {
        let client = MockLabClient::new();
        let options = ProjectListOptions {
            search: Some("lab".to_string()),
            owned: true,
            ..ProjectListOptions::default()
        };
        let mut out = Vec::new();

        let count = run_project(&client, &options, &mut out).unwrap();

        assert_eq!(count, 0);
        assert!(out.is_empty());
        assert_eq!(client.projects_listed_with.borrow().clone(), Some(options));
    }
}

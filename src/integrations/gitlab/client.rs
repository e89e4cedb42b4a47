#![allow(clippy::missing_errors_doc)]
use anyhow::{Context, Result};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::types::{
    CreateIssueOptions, Issue, ListOptions, MergeRequest, Project, ProjectListOptions,
};

const USER_AGENT: &str = concat!("lab/", env!("CARGO_PKG_VERSION"));

/// Trait for interacting with the forge REST API
///
/// `project` arguments are URL-encoded project ids (`group%2Fproject`).
pub trait LabClient {
    /// Create an issue in a project
    fn create_issue(&self, project: &str, options: &CreateIssueOptions) -> Result<Issue>;

    /// Issues visible to the user across all projects
    fn list_issues(&self, options: &ListOptions) -> Result<Vec<Issue>>;

    /// Issues of one project
    fn list_project_issues(&self, project: &str, options: &ListOptions) -> Result<Vec<Issue>>;

    /// Merge requests visible to the user across all projects
    fn list_merge_requests(&self, options: &ListOptions) -> Result<Vec<MergeRequest>>;

    /// Merge requests of one project
    fn list_project_merge_requests(
        &self,
        project: &str,
        options: &ListOptions,
    ) -> Result<Vec<MergeRequest>>;

    /// Projects visible to the user
    fn list_projects(&self, options: &ProjectListOptions) -> Result<Vec<Project>>;
}

/// API base URL for a domain
#[must_use]
pub fn api_base_url(domain: &str) -> String {
    format!("https://{domain}/api/v4")
}

/// Real implementation of `LabClient` over HTTPS
pub struct RealLabClient {
    http_client: Client,
    base_url: String,
    token: String,
}

impl RealLabClient {
    /// Create a client for `https://{domain}/api/v4`
    pub fn new(domain: &str, token: String) -> Result<Self> {
        Self::with_base_url(api_base_url(domain), token)
    }

    pub fn with_base_url(base_url: String, token: String) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("PRIVATE-TOKEN", &self.token)
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> Result<T> {
        let res = self
            .authorized(request)
            .send()
            .with_context(|| format!("Failed to {what}"))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().unwrap_or_default();
            anyhow::bail!("Failed to {what}: {status} - {}", body.trim());
        }

        res.json::<T>()
            .with_context(|| format!("Failed to parse response to {what}"))
    }

    fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
        what: &str,
    ) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, ?query, "GET");
        self.send(self.http_client.get(&url).query(query), what)
    }
}

impl LabClient for RealLabClient {
    fn create_issue(&self, project: &str, options: &CreateIssueOptions) -> Result<Issue> {
        let url = self.url(&format!("projects/{project}/issues"));
        tracing::debug!(%url, title = %options.title, "POST");
        self.send(self.http_client.post(&url).json(options), "create issue")
    }

    fn list_issues(&self, options: &ListOptions) -> Result<Vec<Issue>> {
        self.get("issues", &options.query(), "list issues")
    }

    fn list_project_issues(&self, project: &str, options: &ListOptions) -> Result<Vec<Issue>> {
        self.get(
            &format!("projects/{project}/issues"),
            &options.query(),
            "list project issues",
        )
    }

    fn list_merge_requests(&self, options: &ListOptions) -> Result<Vec<MergeRequest>> {
        self.get("merge_requests", &options.query(), "list merge requests")
    }

    fn list_project_merge_requests(
        &self,
        project: &str,
        options: &ListOptions,
    ) -> Result<Vec<MergeRequest>> {
        self.get(
            &format!("projects/{project}/merge_requests"),
            &options.query(),
            "list project merge requests",
        )
    }

    fn list_projects(&self, options: &ProjectListOptions) -> Result<Vec<Project>> {
        self.get("projects", &options.query(), "list projects")
    }
}

#![allow(clippy::missing_errors_doc)]
use anyhow::Result;

use crate::config::Config;
use crate::domain::remote::{namespace_and_project, RemoteInfo};
use crate::integrations::git::{select_remote, GitClient};
use crate::integrations::gitlab::RealLabClient;

/// Resolves which project a command targets and how to reach its API
pub struct LabService<G>
where
    G: GitClient,
{
    config: Config,
    git_client: G,
}

impl<G> LabService<G>
where
    G: GitClient,
{
    pub const fn new(config: Config, git_client: G) -> Self {
        Self { config, git_client }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Project targeted by a command
    ///
    /// With `repository` (`NAMESPACE/PROJECT`) the first preferred domain is
    /// used and git is not consulted. Otherwise the git remote pointing at a
    /// preferred domain is used.
    pub fn remote(&self, repository: Option<&str>) -> Result<RemoteInfo> {
        if let Some(repository) = repository {
            let (namespace, project) = namespace_and_project(repository)?;
            return Ok(RemoteInfo::new(
                self.config.primary_domain(),
                namespace,
                project,
            ));
        }

        let remotes = self.git_client.remotes()?;
        tracing::debug!(count = remotes.len(), "found git remotes");

        select_remote(&remotes, &self.config.preferred_domains).ok_or_else(|| {
            anyhow::anyhow!(
                "No git remote points at a preferred domain ({}). \
                 Use --repository NAMESPACE/PROJECT or add the host to preferred_domains",
                self.config.preferred_domains.join(", ")
            )
        })
    }

    /// Domain used by commands that are not tied to one project
    pub fn domain(&self) -> String {
        self.remote(None).map_or_else(
            |_| self.config.primary_domain().to_string(),
            |remote| remote.domain,
        )
    }

    /// API client for a domain, authenticated with the configured token
    pub fn client(&self, domain: &str) -> Result<RealLabClient> {
        let token = self.config.token_for(domain)?;
        RealLabClient::new(domain, token)
    }
}

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
mod client;
mod types;

pub use client::{api_base_url, LabClient, RealLabClient};
pub use types::{
    CreateIssueOptions, Issue, ListOptions, MergeRequest, OrderBy, Project, ProjectListOptions,
    ProjectNamespace, ProjectOrderBy, Scope, Sort, State,
};

#[cfg(test)]
pub use client::tests::MockLabClient;

//! Request and response types for the forge REST API
//!
//! Only the fields the commands use are modeled; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// An issue as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    /// Project-scoped number shown as `#iid`
    pub iid: u64,
    pub title: String,
    #[serde(default)]
    pub web_url: String,
    #[serde(default)]
    pub state: String,
}

/// A merge request as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MergeRequest {
    /// Project-scoped number shown as `!iid`
    pub iid: u64,
    pub title: String,
    #[serde(default)]
    pub web_url: String,
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ProjectNamespace {
    pub name: String,
    #[serde(default)]
    pub full_path: String,
}

/// A project as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub namespace: ProjectNamespace,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub web_url: String,
}

impl Project {
    /// `namespace/name` as shown in listings
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}/{}", self.namespace.name, self.name)
    }
}

/// Body of the create issue request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CreateIssueOptions {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<u64>,
    /// Comma separated label names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
}

/// Item state filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum State {
    #[default]
    Opened,
    Closed,
    /// Merge requests only
    Merged,
    All,
}

impl State {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Closed => "closed",
            Self::Merged => "merged",
            Self::All => "all",
        }
    }
}

/// Whose items to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Scope {
    #[default]
    All,
    CreatedByMe,
    AssignedToMe,
}

impl Scope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::CreatedByMe => "created_by_me",
            Self::AssignedToMe => "assigned_to_me",
        }
    }
}

/// Ordering field for issues and merge requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum OrderBy {
    CreatedAt,
    #[default]
    UpdatedAt,
}

impl OrderBy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

/// Ordering field for projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum ProjectOrderBy {
    Id,
    Name,
    Path,
    CreatedAt,
    UpdatedAt,
    #[default]
    LastActivityAt,
}

impl ProjectOrderBy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Path => "path",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::LastActivityAt => "last_activity_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Sort {
    Asc,
    #[default]
    Desc,
}

impl Sort {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Filters shared by issue and merge request listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub state: State,
    pub scope: Scope,
    pub order_by: OrderBy,
    pub sort: Sort,
    pub per_page: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            state: State::default(),
            scope: Scope::default(),
            order_by: OrderBy::default(),
            sort: Sort::default(),
            per_page: 20,
        }
    }
}

impl ListOptions {
    /// Query string pairs, always requesting the first page
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("state", self.state.as_str().to_string()),
            ("scope", self.scope.as_str().to_string()),
            ("order_by", self.order_by.as_str().to_string()),
            ("sort", self.sort.as_str().to_string()),
            ("page", "1".to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

/// Filters for project listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListOptions {
    pub search: Option<String>,
    pub order_by: ProjectOrderBy,
    pub sort: Sort,
    pub owned: bool,
    pub per_page: u32,
}

impl Default for ProjectListOptions {
    fn default() -> Self {
        Self {
            search: None,
            order_by: ProjectOrderBy::default(),
            sort: Sort::default(),
            owned: false,
            per_page: 20,
        }
    }
}

impl ProjectListOptions {
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("order_by", self.order_by.as_str().to_string()),
            ("sort", self.sort.as_str().to_string()),
            ("page", "1".to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        if let Some(search) = self.search.as_ref().filter(|s| !s.is_empty()) {
            query.push(("search", search.clone()));
        }
        if self.owned {
            query.push(("owned", "true".to_string()));
        }
        query
    }
}

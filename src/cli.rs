use clap::{Args, Parser, Subcommand};

use crate::integrations::gitlab::{
    ListOptions, OrderBy, ProjectListOptions, ProjectOrderBy, Scope, Sort, State,
};

/// Command-line client for GitLab issues, merge requests and projects
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// When to use colored output
    #[arg(long, value_name = "WHEN", global = true, ignore_case = true)]
    pub color: Option<crate::color::ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the project, an issue or a merge request in a browser
    Browse {
        /// Issue (#12, i12, I12) or merge request (!34, m34, M34); project page when omitted
        reference: Option<String>,
        /// Print the URL instead of opening it
        #[arg(short, long)]
        url: bool,
        #[command(flatten)]
        repository: RepositoryArgs,
    },
    /// Add issue
    AddIssue(AddIssueArgs),
    /// List issues
    #[command(visible_alias = "i")]
    Issue {
        #[command(flatten)]
        search: SearchArgs,
        #[command(flatten)]
        repository: RepositoryArgs,
    },
    /// List merge requests
    #[command(visible_alias = "mr")]
    MergeRequest {
        #[command(flatten)]
        search: SearchArgs,
        #[command(flatten)]
        repository: RepositoryArgs,
    },
    /// List projects
    Project(ProjectArgs),
    /// Initialize configuration files (creates both global and local configs by default)
    Init {
        /// Generate only global config
        #[arg(long, conflicts_with = "local")]
        global: bool,
        /// Generate only local config
        #[arg(long, conflicts_with = "global")]
        local: bool,
        /// Overwrite existing config files
        #[arg(short, long)]
        force: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
}

/// Target project override
#[derive(Args, Debug, Clone, Default)]
pub struct RepositoryArgs {
    /// Target project instead of the one behind the current git remote
    #[arg(short = 'p', long, value_name = "NAMESPACE/PROJECT")]
    pub repository: Option<String>,
}

/// Filters for issue and merge request listings
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Number of items to show
    #[arg(short = 'n', long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub line: u32,
    /// Filter by state
    #[arg(long, value_enum, default_value_t)]
    pub state: State,
    /// Filter by author or assignee
    #[arg(long, value_enum, default_value_t)]
    pub scope: Scope,
    /// Field to order by
    #[arg(short = 'o', long, value_enum, default_value_t)]
    pub order_by: OrderBy,
    /// Sort direction
    #[arg(long, value_enum, default_value_t)]
    pub sort: Sort,
    /// Search across all projects instead of the current one
    #[arg(short = 'A', long)]
    pub all_repository: bool,
}

impl SearchArgs {
    #[must_use]
    pub const fn list_options(&self) -> ListOptions {
        ListOptions {
            state: self.state,
            scope: self.scope,
            order_by: self.order_by,
            sort: self.sort,
            per_page: self.line,
        }
    }
}

/// Flags for `add-issue`
#[derive(Args, Debug, Clone, Default)]
pub struct AddIssueArgs {
    /// The title of an issue
    #[arg(short, long)]
    pub title: Option<String>,
    /// The description of an issue
    #[arg(short, long)]
    pub description: Option<String>,
    /// The ID of a user to assign issue
    #[arg(short, long, value_name = "ID")]
    pub assignee_id: Option<u64>,
    /// The ID of a milestone to assign issue
    #[arg(short, long, value_name = "ID")]
    pub milestone_id: Option<u64>,
    /// Comma-separated label names for an issue
    #[arg(short, long)]
    pub labels: Option<String>,
    #[command(flatten)]
    pub repository: RepositoryArgs,
}

/// Flags for `project`
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Number of projects to show
    #[arg(short = 'n', long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub line: u32,
    /// Only projects matching this text
    #[arg(short, long)]
    pub search: Option<String>,
    /// Field to order by
    #[arg(short = 'o', long, value_enum, default_value_t)]
    pub order_by: ProjectOrderBy,
    /// Sort direction
    #[arg(long, value_enum, default_value_t)]
    pub sort: Sort,
    /// Only projects owned by the current user
    #[arg(long)]
    pub owned: bool,
}

impl ProjectArgs {
    #[must_use]
    pub fn list_options(&self) -> ProjectListOptions {
        ProjectListOptions {
            search: self.search.clone(),
            order_by: self.order_by,
            sort: self.sort,
            owned: self.owned,
            per_page: self.line,
        }
    }
}

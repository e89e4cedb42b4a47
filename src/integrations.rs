// External integrations module
// Processes and services lab talks to: git, the user's editor and browser, GitLab

pub mod browser;
pub mod editor;
pub mod git;

// GitLab REST API
pub mod gitlab;

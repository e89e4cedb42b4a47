// Command handlers module
// One submodule per subcommand, plus shared helpers in `common`

pub mod add_issue;
pub mod browse;
pub mod common;
pub mod completion;
pub mod init;
pub mod issue;
pub mod merge_request;
pub mod project;

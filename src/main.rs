#![allow(clippy::literal_string_with_formatting_args)]
mod cli;
mod color;
mod commands;
mod config;
mod domain;
mod integrations;
mod logging;
mod service;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::env::CompleteEnv;

// Use shared CLI definitions from cli module
use cli::{Cli, Commands};

fn run(command: Commands, color_mode: color::ColorMode) -> Result<()> {
    match command {
        Commands::Browse {
            reference,
            url,
            repository,
        } => commands::browse::cmd_browse(
            reference.as_deref(),
            url,
            repository.repository.as_deref(),
            color_mode,
        ),
        Commands::AddIssue(args) => commands::add_issue::cmd_add_issue(&args, color_mode),
        Commands::Issue { search, repository } => {
            commands::issue::cmd_issue(&search, repository.repository.as_deref(), color_mode)
        }
        Commands::MergeRequest { search, repository } => {
            commands::merge_request::cmd_merge_request(
                &search,
                repository.repository.as_deref(),
                color_mode,
            )
        }
        Commands::Project(args) => commands::project::cmd_project(&args, color_mode),
        Commands::Init {
            global,
            local,
            force,
        } => commands::init::cmd_init(global, local, force, color_mode),
        Commands::Completion { shell } => commands::completion::cmd_completion(&shell),
    }
}

fn main() {
    // Handle dynamic completion via COMPLETE environment variable
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    // Resolve color mode from CLI flag and environment variables
    let color_mode = color::ColorMode::resolve(cli.color);
    logging::init(color_mode);

    if let Err(err) = run(cli.command, color_mode) {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("{}", color::error(color_mode, format!("{err:#}")));
        std::process::exit(1);
    }
}

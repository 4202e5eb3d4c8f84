// src/main.rs
mod auth;
mod cli;
mod client;
mod commands;
mod config;
mod diff;
mod endpoint;
mod error;
mod git;
mod logging;
mod message;
mod presets;
mod prompt;
mod types;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, HookCommands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Hook {
            command:
                HookCommands::PrepareCommitMsg {
                    commit_msg_file,
                    source,
                    sha,
                },
        } => {
            // A broken generator must never block a commit: warn and exit 0.
            if let Err(err) = commands::cmd_prepare_commit_msg(
                &commit_msg_file,
                source.as_deref(),
                sha.as_deref(),
            )
            .await
            {
                eprintln!("git-ai-commit: {err:#}");
            }
            Ok(())
        }
        Commands::Hook { command } => commands::cmd_hook(command),
        Commands::Show { stdin } => commands::cmd_show(stdin).await,
        Commands::Presets { name } => commands::cmd_presets(name.as_deref()),
    }
}

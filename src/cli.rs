// src/cli.rs
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "git-ai-commit",
    version,
    about = "Prefill Git commit messages from the staged diff via any OpenAI-compatible endpoint",
    after_help = "EXAMPLES:
    git-ai-commit hook install           # Wire up the current repository
    git commit                           # Editor opens with a generated message

    git-ai-commit show                   # Print a message for the staged diff
    git diff | git-ai-commit show --stdin

    git-ai-commit presets                # List known providers
    git-ai-commit presets ollama         # Setup commands for a local server

CONFIGURATION (read from git config):
    ai-commit.endpoint         Base URL or full /v1/chat/completions URL
    ai-commit.model            Model name sent with each request
    ai-commit.apiKey           Key itself, $ENV_VAR reference, or git-credentials
    ai-commit.maxDiffBytes     Staged diff byte cap, <= 0 disables (default 200000)
    ai-commit.timeoutSeconds   Request deadline in seconds (default 30)"
)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Hook entry point and hook management
    Hook {
        #[command(subcommand)]
        command: HookCommands,
    },
    /// Generate a commit message for the staged diff and print it to stdout
    Show {
        /// Read the diff from stdin instead of the staged index
        #[arg(long)]
        stdin: bool,
    },
    /// List provider presets, or print the git config commands for one
    Presets {
        /// Preset name (case-insensitive), e.g. openai, groq, ollama
        name: Option<String>,
    },
}

#[derive(Subcommand, Clone)]
pub enum HookCommands {
    /// Called by Git to prefill the commit message file; never blocks a commit
    PrepareCommitMsg {
        /// Path to the commit message file Git is assembling
        commit_msg_file: PathBuf,
        /// Commit source reported by Git (message, template, merge, squash, commit)
        source: Option<String>,
        /// Commit SHA, passed for amend-style invocations
        sha: Option<String>,
    },
    /// Install the prepare-commit-msg hook into the current repository
    Install,
    /// Remove the installed hook
    Uninstall,
}

/// Marker comment that identifies our hook script; install and uninstall
/// refuse to touch anything without it.
pub const HOOK_MARKER: &str = "git-ai-commit-hook";

pub const HOOK_SCRIPT: &str = r#"#!/bin/sh
# git-ai-commit-hook: prefill the commit message from the staged diff
# This script runs on Linux, macOS, and Windows (via Git Bash)

# Skip if git-ai-commit is not in PATH
if ! command -v git-ai-commit >/dev/null 2>&1; then
    exit 0
fi

# Never blocks: on any failure this prints a warning and exits 0
exec git-ai-commit hook prepare-commit-msg "$@"
"#;

// src/commands/hook.rs
use anyhow::{bail, Context, Result};
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::cli::{HookCommands, HOOK_MARKER, HOOK_SCRIPT};
use crate::client::LlmClient;
use crate::commands::generate_message;
use crate::config::Config;
use crate::diff::staged_diff;
use crate::git::git_dir;
use crate::message::{has_meaningful_content, merge_message};

/// Commit sources where Git is assembling a special message we must not
/// touch.
const SKIP_SOURCES: &[&str] = &["merge", "squash"];

/// The prepare-commit-msg flow: skip when the message is already spoken
/// for, otherwise generate from the staged diff and splice the result above
/// any comment block. The caller downgrades every error to a warning; this
/// path never blocks a commit.
pub async fn cmd_prepare_commit_msg(
    commit_msg_file: &Path,
    source: Option<&str>,
    _sha: Option<&str>,
) -> Result<()> {
    if let Some(source) = source {
        if SKIP_SOURCES.contains(&source) {
            log::debug!("skipping, commit source is {source}");
            return Ok(());
        }
    }

    let existing = fs::read_to_string(commit_msg_file)
        .with_context(|| format!("read commit message file {}", commit_msg_file.display()))?;
    if has_meaningful_content(&existing) {
        log::debug!("skipping, commit message file already has content");
        return Ok(());
    }

    let config = Config::from_git().resolve()?;

    let (diff, truncated) = staged_diff(config.max_diff_bytes)?;
    if diff.trim().is_empty() {
        log::debug!("skipping, nothing staged");
        return Ok(());
    }
    if truncated {
        log::debug!("staged diff truncated to {} bytes", config.max_diff_bytes);
    }

    let client = LlmClient::new(&config)?;
    let message = generate_message(&client, &diff).await?;

    let merged = merge_message(&existing, &message);
    fs::write(commit_msg_file, merged)
        .with_context(|| format!("write commit message file {}", commit_msg_file.display()))?;
    Ok(())
}

// =============================================================================
// INSTALL / UNINSTALL
// =============================================================================

pub fn cmd_hook(command: HookCommands) -> Result<()> {
    let git_dir = git_dir().context("Could not locate .git directory. Are you in a git repo?")?;
    let hooks_dir = git_dir.join("hooks");
    let hook_path = hooks_dir.join("prepare-commit-msg");

    match command {
        HookCommands::Install => {
            if hook_path.exists() {
                let existing = fs::read_to_string(&hook_path).unwrap_or_default();
                if existing.contains(HOOK_MARKER) {
                    println!("git-ai-commit hook is already installed.");
                    return Ok(());
                }
                bail!(
                    "A prepare-commit-msg hook already exists at {:?}. Please back it up or delete it first.",
                    hook_path
                );
            }

            fs::create_dir_all(&hooks_dir)
                .with_context(|| format!("create hooks directory {:?}", hooks_dir))?;
            fs::write(&hook_path, HOOK_SCRIPT)?;

            #[cfg(unix)]
            {
                let mut perms = fs::metadata(&hook_path)?.permissions();
                perms.set_mode(0o755);
                fs::set_permissions(&hook_path, perms)?;
            }

            println!("Hook installed at {:?}", hook_path);
        }
        HookCommands::Uninstall => {
            if !hook_path.exists() {
                println!("No hook found to uninstall.");
                return Ok(());
            }

            let content = fs::read_to_string(&hook_path)?;
            if content.contains(HOOK_MARKER) {
                fs::remove_file(&hook_path)?;
                println!("Hook uninstalled successfully.");
            } else {
                println!(
                    "The existing hook was not created by git-ai-commit. Manual removal required."
                );
            }
        }
        // prepare-commit-msg is dispatched directly in main
        HookCommands::PrepareCommitMsg { .. } => unreachable!(),
    }
    Ok(())
}

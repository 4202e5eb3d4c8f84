// src/commands/show.rs
use anyhow::{bail, Context, Result};

use crate::client::LlmClient;
use crate::commands::generate_message;
use crate::config::Config;
use crate::diff::{read_stdin, staged_diff};

/// Generate a commit message and print it to stdout without touching any
/// file. Unlike the hook path, errors here are fatal.
pub async fn cmd_show(from_stdin: bool) -> Result<()> {
    let config = Config::from_git().resolve()?;

    let (diff, truncated) = if from_stdin {
        (read_stdin().context("read diff from stdin")?, false)
    } else {
        staged_diff(config.max_diff_bytes)?
    };
    if diff.trim().is_empty() {
        if from_stdin {
            bail!("no diff received on stdin");
        }
        bail!("no staged changes found (did you forget to git add?)");
    }
    if truncated {
        log::debug!("staged diff truncated to {} bytes", config.max_diff_bytes);
    }

    eprintln!("Querying {} ({})...", config.endpoint, config.model);

    let client = LlmClient::new(&config)?;
    let message = generate_message(&client, &diff).await?;
    print!("{message}");
    Ok(())
}

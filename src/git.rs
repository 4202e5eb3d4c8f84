// src/git.rs
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::GitError;

// =============================================================================
// PLUMBING
// =============================================================================

/// Run git with the given args and return stdout. Non-zero exit is an error
/// carrying trimmed stderr.
pub fn run_git(args: &[&str]) -> Result<String, GitError> {
    let output = Command::new("git")
        .args(args)
        .output()
        .map_err(|e| GitError::Spawn {
            args: args.join(" "),
            source: e,
        })?;
    if !output.status.success() {
        return Err(GitError::CommandFailed {
            args: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// `git config --get <key>` from the effective config (system + global +
/// local). Git exits non-zero for an unset key; that is None, not an error.
pub fn config_get(key: &str) -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", key])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout);
    Some(value.trim_end_matches('\n').to_string())
}

/// Path of the repository's git directory, or None outside a repository.
pub fn git_dir() -> Option<PathBuf> {
    let out = run_git(&["rev-parse", "--git-dir"]).ok()?;
    let path = out.trim();
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Staged changes as raw bytes. Color and external diff drivers are disabled
/// so the output stays parseable and reproducible.
pub fn staged_diff_bytes() -> Result<Vec<u8>, GitError> {
    let args = ["diff", "--cached", "--no-color", "--no-ext-diff"];
    let output = Command::new("git")
        .args(args)
        .output()
        .map_err(|e| GitError::Spawn {
            args: args.join(" "),
            source: e,
        })?;
    if !output.status.success() {
        return Err(GitError::DiffUnavailable {
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(output.stdout)
}

// =============================================================================
// CREDENTIAL HELPER
// =============================================================================

/// Username under which the API key is expected in the credential store.
pub const CREDENTIAL_USERNAME: &str = "api-key";

/// Ask the configured credential helper chain for a stored secret.
///
/// Speaks the `git credential fill` line protocol: `key=value` lines
/// terminated by a blank line on stdin, a `password=` line parsed from
/// stdout. Terminal prompting is disabled; without a stored credential git
/// exits non-zero instead of asking, and that means "nothing stored" here.
/// Only failing to spawn git at all is an error.
pub fn fill_credential(protocol: &str, host: &str) -> Result<Option<String>, GitError> {
    let mut child = Command::new("git")
        .args(["credential", "fill"])
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| GitError::Spawn {
            args: "credential fill".to_string(),
            source: e,
        })?;

    let request = format!("protocol={protocol}\nhost={host}\nusername={CREDENTIAL_USERNAME}\n\n");
    if let Some(mut stdin) = child.stdin.take() {
        // Git may exit before draining stdin; a broken pipe here is not a failure.
        let _ = stdin.write_all(request.as_bytes());
    }

    let output = child.wait_with_output().map_err(|e| GitError::Spawn {
        args: "credential fill".to_string(),
        source: e,
    })?;
    if !output.status.success() {
        return Ok(None);
    }
    Ok(parse_credential_output(&String::from_utf8_lossy(
        &output.stdout,
    )))
}

/// First `password=` value from a credential helper response.
pub fn parse_credential_output(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.strip_prefix("password=").map(str::to_string))
}

// src/commands/mod.rs
mod hook;
mod presets;
mod show;

pub use hook::{cmd_hook, cmd_prepare_commit_msg};
pub use presets::cmd_presets;
pub use show::cmd_show;

use anyhow::Result;

use crate::client::LlmClient;
use crate::error::ClientError;
use crate::message::sanitize_message;
use crate::prompt::{build_prompt, SYSTEM_PROMPT};

/// Shared pipeline behind both the hook and `show`: prompt the model with
/// the diff, then clean up its answer. An answer that sanitizes away to
/// nothing is an error, not an empty commit message.
pub(crate) async fn generate_message(client: &LlmClient, diff: &str) -> Result<String> {
    let prompt = build_prompt(diff);
    let raw = client.chat(SYSTEM_PROMPT, &prompt).await?;
    let message = sanitize_message(&raw);
    if message.is_empty() {
        return Err(ClientError::EmptyMessage.into());
    }
    Ok(message)
}

// src/commands/presets.rs
use anyhow::{bail, Result};

use crate::config::{CONFIG_API_KEY, CONFIG_ENDPOINT, CONFIG_MODEL};
use crate::presets::{find_preset, Preset, PRESETS};

/// With no name, list the known provider presets. With a name, print the
/// `git config` commands that point this tool at that provider.
pub fn cmd_presets(name: Option<&str>) -> Result<()> {
    match name {
        None => {
            println!("Available presets:\n");
            for preset in PRESETS {
                println!("  {:<12} {:<28} {}", preset.name, preset.model, preset.description);
            }
            println!("\nRun `git-ai-commit presets <name>` for setup commands.");
        }
        Some(name) => match find_preset(name) {
            Some(preset) => print_preset(preset),
            None => {
                let known: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
                bail!("unknown preset {name:?} (known: {})", known.join(", "));
            }
        },
    }
    Ok(())
}

fn print_preset(preset: &Preset) {
    println!("# {}", preset.description);
    println!("git config {CONFIG_ENDPOINT} {}", preset.endpoint);
    println!("git config {CONFIG_MODEL} {}", preset.model);
    if preset.api_key_hint.is_empty() {
        println!("# no API key required");
    } else {
        println!("git config {CONFIG_API_KEY} '{}'", preset.api_key_hint);
        println!("# or keep the key in your OS keychain:");
        println!("# git config {CONFIG_API_KEY} git-credentials");
    }
}

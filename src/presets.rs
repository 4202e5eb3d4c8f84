// src/presets.rs

/// A known OpenAI-compatible provider, used only to print ready-to-paste
/// `git config` commands. Request-time behavior never consults this table.
#[derive(Debug)]
pub struct Preset {
    pub name: &'static str,
    pub endpoint: &'static str,
    pub model: &'static str,
    /// Suggested `ai-commit.apiKey` value; empty when the provider needs
    /// no key.
    pub api_key_hint: &'static str,
    pub description: &'static str,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "openai",
        endpoint: "https://api.openai.com/v1",
        model: "gpt-5-nano",
        api_key_hint: "$OPENAI_API_KEY",
        description: "OpenAI platform",
    },
    Preset {
        name: "groq",
        endpoint: "https://api.groq.com/openai/v1",
        model: "llama-3.3-70b-versatile",
        api_key_hint: "$GROQ_API_KEY",
        description: "Groq hosted open models",
    },
    Preset {
        name: "openrouter",
        endpoint: "https://openrouter.ai/api/v1",
        model: "openrouter/auto",
        api_key_hint: "$OPENROUTER_API_KEY",
        description: "OpenRouter model gateway",
    },
    Preset {
        name: "mistral",
        endpoint: "https://api.mistral.ai/v1",
        model: "mistral-small-latest",
        api_key_hint: "$MISTRAL_API_KEY",
        description: "Mistral platform",
    },
    Preset {
        name: "deepseek",
        endpoint: "https://api.deepseek.com/v1",
        model: "deepseek-chat",
        api_key_hint: "$DEEPSEEK_API_KEY",
        description: "DeepSeek platform",
    },
    Preset {
        name: "ollama",
        endpoint: "http://localhost:11434/v1",
        model: "llama3.2:latest",
        api_key_hint: "",
        description: "Local Ollama server, no API key",
    },
];

pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}

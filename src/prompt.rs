// src/prompt.rs

// =============================================================================
// PROMPTS
// =============================================================================

pub const SYSTEM_PROMPT: &str = "You write concise, high-signal Git commit messages.";

const COMMIT_PROMPT: &str = r#"You are an expert software engineer. Write a Git commit message for the following staged diff.

Requirements:
- Output plain text only.
- First line: a concise subject following the Conventional Commits format, max 72 characters.
  The subject must start with one of these types followed by a colon and a space:
    feat:     a new feature
    fix:      a bug fix
    docs:     documentation changes only
    style:    formatting, whitespace - no logic change
    refactor: code restructured without adding features or fixing bugs
    perf:     performance improvement
    test:     adding or updating tests
    chore:    build process, tooling, dependency updates, CI config
  Use a scope in parentheses when it helps clarity, e.g. "feat(auth): add OAuth2 login".
  Write the description in imperative mood, e.g. "feat: add retry logic" not "feat: added retry logic".
- Then a blank line.
- Then 3-7 bullet points ("- ") summarizing key changes.
- Mention user-visible behavior changes and important refactors.
- Do not include code fences.

Staged diff:
{diff}"#;

/// Fixed instruction template with the diff interpolated at the end. No
/// templating engine, one placeholder.
pub fn build_prompt(diff: &str) -> String {
    COMMIT_PROMPT.replace("{diff}", diff)
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_the_diff() {
        let prompt = build_prompt("diff --git a/x b/x\n+added line");
        assert!(prompt.contains("diff --git a/x b/x"));
        assert!(prompt.contains("+added line"));
    }

    #[test]
    fn prompt_keeps_the_instruction_header() {
        let prompt = build_prompt("whatever");
        assert!(prompt.starts_with("You are an expert software engineer."));
        assert!(prompt.contains("Conventional Commits"));
        assert!(prompt.contains("max 72 characters"));
        assert!(prompt.ends_with("whatever"));
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(build_prompt("same"), build_prompt("same"));
    }

    #[test]
    fn system_prompt_is_plain_text() {
        assert!(!SYSTEM_PROMPT.contains('{'));
        assert!(!SYSTEM_PROMPT.is_empty());
    }
}

// src/message.rs

// =============================================================================
// SANITIZER
// =============================================================================

/// Clean a model answer into plain commit-message text.
///
/// CRLF becomes LF, surrounding whitespace goes, a wrapping pair of
/// triple-backtick fences goes, and non-empty output ends with exactly one
/// newline. An empty answer stays empty; the pipeline treats that as a
/// failure.
pub fn sanitize_message(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n");
    let mut text = unified.trim();
    if let Some(inner) = text
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    {
        text = inner.trim();
    }
    if text.is_empty() {
        String::new()
    } else {
        format!("{text}\n")
    }
}

// =============================================================================
// COMMIT-MESSAGE FILE
// =============================================================================

/// True when any line, after trimming, is non-empty and not a `#` comment.
/// This is the guard that keeps `-m`, amended and pre-filled messages intact.
pub fn has_meaningful_content(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Splice `generated` into a commit-message file body.
///
/// A file the user already wrote into comes back untouched. Otherwise the
/// generated message goes on top with one trailing newline, and git's
/// comment block, when present, stays visible below exactly one blank line.
/// An entirely blank existing body is dropped.
pub fn merge_message(existing: &str, generated: &str) -> String {
    if has_meaningful_content(existing) {
        return existing.to_string();
    }
    let mut merged = generated.trim_end().to_string();
    merged.push('\n');
    if !existing.trim().is_empty() {
        merged.push('\n');
        merged.push_str(existing);
    }
    merged
}

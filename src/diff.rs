// src/diff.rs
use std::io::{self, Read};

use crate::error::GitError;
use crate::git;

/// Appended when the staged diff is cut at `ai-commit.maxDiffBytes`, so the
/// model knows the input is incomplete.
pub const TRUNCATION_MARKER: &str = "\n\n[diff truncated]\n";

/// Staged diff as prompt text, with the configured byte cap applied.
/// `max_bytes == 0` disables the cap. The bool reports whether the diff was
/// cut.
pub fn staged_diff(max_bytes: usize) -> Result<(String, bool), GitError> {
    let raw = git::staged_diff_bytes()?;
    Ok(truncate_diff(raw, max_bytes))
}

/// Cut `bytes` to at most `max_bytes` bytes and mark the cut.
///
/// The cut is byte-exact: mid-line, and mid-codepoint if that is where the
/// limit falls (a split sequence becomes a replacement character in the
/// text). Anything else would make the cap depend on content.
pub fn truncate_diff(bytes: Vec<u8>, max_bytes: usize) -> (String, bool) {
    if max_bytes == 0 || bytes.len() <= max_bytes {
        return (String::from_utf8_lossy(&bytes).into_owned(), false);
    }
    let mut cut = bytes;
    cut.truncate(max_bytes);
    let mut text = String::from_utf8_lossy(&cut).into_owned();
    text.push_str(TRUNCATION_MARKER);
    (text, true)
}

/// Diff handed over a pipe, for `show --stdin`.
pub fn read_stdin() -> io::Result<String> {
    let mut buf = Vec::new();
    io::stdin().lock().read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_diff_is_unchanged() {
        let (text, truncated) = truncate_diff(b"short diff content".to_vec(), 1000);
        assert_eq!(text, "short diff content");
        assert!(!truncated);
    }

    #[test]
    fn exact_limit_is_unchanged() {
        let (text, truncated) = truncate_diff(vec![b'a'; 100], 100);
        assert_eq!(text, "a".repeat(100));
        assert!(!truncated);
    }

    #[test]
    fn over_limit_is_cut_byte_exact() {
        let diff = format!("{}{}", "a".repeat(100), "b".repeat(50));
        let (text, truncated) = truncate_diff(diff.into_bytes(), 100);
        assert!(truncated);
        assert_eq!(text, format!("{}{}", "a".repeat(100), TRUNCATION_MARKER));
    }

    #[test]
    fn one_byte_over_is_cut() {
        let (text, truncated) = truncate_diff(b"abcde".to_vec(), 4);
        assert!(truncated);
        assert_eq!(text, format!("abcd{TRUNCATION_MARKER}"));
    }

    #[test]
    fn cut_is_not_line_aligned() {
        let (text, truncated) = truncate_diff(b"line one\nline two\n".to_vec(), 12);
        assert!(truncated);
        assert_eq!(text, format!("line one\nlin{TRUNCATION_MARKER}"));
    }

    #[test]
    fn zero_means_unlimited() {
        let diff = "x".repeat(500_000);
        let (text, truncated) = truncate_diff(diff.clone().into_bytes(), 0);
        assert_eq!(text, diff);
        assert!(!truncated);
    }

    #[test]
    fn empty_diff_stays_empty() {
        let (text, truncated) = truncate_diff(Vec::new(), 100);
        assert!(text.is_empty());
        assert!(!truncated);
    }

    #[test]
    fn split_codepoint_becomes_replacement_char() {
        // "é" is two bytes; cutting after the first leaves an invalid tail.
        let (text, truncated) = truncate_diff("abé".as_bytes().to_vec(), 3);
        assert!(truncated);
        assert!(text.starts_with("ab\u{FFFD}"));
        assert!(text.ends_with(TRUNCATION_MARKER));
    }
}

//! Extraction of `[[Card Name]]` tokens from free text.

use std::sync::OnceLock;

/// Non-greedy capture between a literal `[[` and the next `]]`.
/// `.` excludes newlines, so a token never spans lines.
static TOKEN_PATTERN: OnceLock<regex::Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn token_pattern() -> &'static regex::Regex {
    TOKEN_PATTERN.get_or_init(|| {
        regex::Regex::new(r"\[\[(.*?)\]\]").expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Extract every bracketed card name from `text`, in order of appearance.
///
/// The captured text is returned verbatim: no trimming, no case folding.
/// Unmatched brackets are ignored.
#[must_use]
pub fn extract_tokens(text: &str) -> Vec<String> {
    token_pattern()
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

use std::sync::LazyLock;

use regex::Regex;

static CONTROL_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\t\n]+").unwrap());

/// Replace every run of tabs and newlines with a single space.
pub fn collapse_control_runs(text: &str) -> String {
    CONTROL_RUNS.replace_all(text, " ").into_owned()
}

/// Trim ASCII whitespace, vertical tab and NUL from both ends. Unicode
/// spaces such as U+00A0 are content and survive.
pub fn strip(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b' || c == '\0')
}

/// Remove tabs and newlines entirely.
pub fn strip_control_runs(text: &str) -> String {
    CONTROL_RUNS.replace_all(text, "").into_owned()
}

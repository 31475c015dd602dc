use regex::Regex;
use std::sync::LazyLock;

static WS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Trim, then collapse every internal run of whitespace to a single space.
pub fn normalize_text(s: &str) -> String {
    WS_RUN.replace_all(s.trim(), " ").into_owned()
}

/// Characters that cannot appear in markup content at all.
pub(crate) fn is_encodable(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

//! Inline transforms applied within a single line.

use std::sync::LazyLock;

use regex::Regex;

/// Non-greedy `**…**` span: shortest match, scanned left to right.
static BOLD_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Replace every `**…**` span with `<strong>…</strong>`.
///
/// Matches are non-overlapping and replaced left to right. An unpaired or
/// unterminated `**` never matches and stays in the output as literal
/// characters. All other characters pass through verbatim; no escaping is
/// performed.
#[must_use]
pub fn bold_spans(line: &str) -> String {
    BOLD_SPAN_RE
        .replace_all(line, "<strong>$1</strong>")
        .into_owned()
}

//! Per-line classification for itinerary text.
//!
//! Each line is classified independently; no state crosses line boundaries.
//! The checks run in a fixed priority order because the prefixes overlap:
//! a line starting with `### ` must never match the `# ` rule, and a
//! fully-bold line must be claimed before the paragraph fallback.

/// Classification of a single input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Starts with `### `.
    Heading3,
    /// Starts with `## `.
    Heading2,
    /// Starts with `# `.
    Heading1,
    /// The untrimmed line both starts and ends with `**`.
    ///
    /// Rendered as a level-3 heading, not as emphasis: the model uses
    /// fully-bold lines as sub-headers.
    StandaloneBold,
    /// Starts with `- `.
    ListItem,
    /// Trims to exactly `---`.
    Rule,
    /// Non-empty after trimming, none of the above.
    Paragraph,
    /// Empty after trimming.
    Blank,
}

/// Classify a single line. The first matching rule wins.
#[must_use]
pub fn classify(line: &str) -> LineKind {
    if line.starts_with("### ") {
        LineKind::Heading3
    } else if line.starts_with("## ") {
        LineKind::Heading2
    } else if line.starts_with("# ") {
        LineKind::Heading1
    } else if line.starts_with("**") && line.ends_with("**") {
        LineKind::StandaloneBold
    } else if line.starts_with("- ") {
        LineKind::ListItem
    } else if line.trim() == "---" {
        LineKind::Rule
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Paragraph
    }
}

//! Markup backend trait for fragment emission.
//!
//! The line renderer decides what each line IS; the backend decides what
//! markup a fragment of that kind looks like. All structural fragments are
//! plain HTML in every current backend, so they are trait defaults; only
//! the horizontal rule differs between the themed and unthemed variants.

use std::fmt::Write;

/// Backend trait for fragment emission.
pub trait MarkupBackend {
    /// Emit a heading fragment at the given level (1–3).
    fn heading(level: u8, text: &str, out: &mut String) {
        write!(out, "<h{level}>{text}</h{level}>").unwrap();
    }

    /// Emit a bare list-item fragment.
    ///
    /// No enclosing list container is emitted here or anywhere in the
    /// renderer; the embedding page supplies the wrapper.
    fn list_item(text: &str, out: &mut String) {
        write!(out, "<li>{text}</li>").unwrap();
    }

    /// Emit a paragraph fragment. `inner` has already had inline spans
    /// applied and may contain markup.
    fn paragraph(inner: &str, out: &mut String) {
        write!(out, "<p>{inner}</p>").unwrap();
    }

    /// Emit a horizontal rule.
    ///
    /// Default is an unstyled `<hr>`. [`HtmlBackend`](crate::HtmlBackend)
    /// overrides this with the trip page's inline presentation attributes.
    fn horizontal_rule(out: &mut String) {
        out.push_str("<hr>");
    }
}

/// Unthemed backend: trait defaults only.
///
/// Produces the same structural fragments as [`HtmlBackend`](crate::HtmlBackend)
/// but leaves the horizontal rule bare, for pages that style rules through
/// a stylesheet instead of inline attributes.
pub struct PlainBackend;

impl MarkupBackend for PlainBackend {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_backend_heading() {
        let mut out = String::new();
        PlainBackend::heading(2, "Week 1", &mut out);
        assert_eq!(out, "<h2>Week 1</h2>");
    }

    #[test]
    fn test_plain_backend_list_item() {
        let mut out = String::new();
        PlainBackend::list_item("Visit museum", &mut out);
        assert_eq!(out, "<li>Visit museum</li>");
    }

    #[test]
    fn test_plain_backend_paragraph() {
        let mut out = String::new();
        PlainBackend::paragraph("some <strong>bold</strong> text", &mut out);
        assert_eq!(out, "<p>some <strong>bold</strong> text</p>");
    }

    #[test]
    fn test_plain_backend_rule_is_unstyled() {
        let mut out = String::new();
        PlainBackend::horizontal_rule(&mut out);
        assert_eq!(out, "<hr>");
    }
}

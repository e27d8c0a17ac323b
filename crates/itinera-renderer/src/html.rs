//! Themed HTML backend for itinerary rendering.

use std::fmt::Write;

use crate::backend::MarkupBackend;

/// Inline style for the horizontal rule, matching the trip page's day
/// separators: vertical margin and a 2px solid top border in light gray.
const HR_STYLE: &str = "margin: 24px 0; border: none; border-top: 2px solid #e0e0e0;";

/// HTML backend producing the fragments the itinerary page embeds verbatim.
///
/// Structural fragments use the trait defaults; the horizontal rule
/// carries the page's inline presentation attributes.
pub struct HtmlBackend;

impl MarkupBackend for HtmlBackend {
    fn horizontal_rule(out: &mut String) {
        write!(out, r#"<hr style="{HR_STYLE}">"#).unwrap();
    }
}

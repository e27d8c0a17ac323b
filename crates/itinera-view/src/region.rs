//! Page state and the state → visible region mapping.

use std::fmt::Write;

use crate::escape::escape_html;

/// State of the itinerary page.
///
/// One request is in flight at a time, so the page is always in exactly
/// one of these states and shows exactly one region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    /// Request to the itinerary provider is in flight.
    Loading,
    /// Rendered itinerary markup, inserted into the result region verbatim.
    Result(String),
    /// Provider or transport failure with a human-readable message.
    ///
    /// The message is escaped on render since it can carry provider error
    /// text.
    Error(String),
}

/// Render the single visible region for the given state.
///
/// The result region is the content container for the renderer's output.
/// Bare `<li>` fragments render as a flat list inside it; callers that
/// need strictly valid list markup can insert their own `<ul>` into the
/// markup they pass in.
#[must_use]
pub fn render_region(state: &ViewState) -> String {
    let mut out = String::new();
    match state {
        ViewState::Loading => {
            out.push_str(r#"<div class="itinerary-loading">Generating itinerary...</div>"#);
        }
        ViewState::Result(markup) => {
            write!(out, r#"<div class="itinerary-result">{markup}</div>"#).unwrap();
        }
        ViewState::Error(message) => {
            write!(
                out,
                r#"<div class="itinerary-error" role="alert">{}</div>"#,
                escape_html(message)
            )
            .unwrap();
        }
    }
    out
}

//! Line-oriented itinerary markup renderer.
//!
//! Converts the free-text itinerary returned by the trip planner's language
//! model into HTML fragments, one decision per line, with no cross-line
//! state. This is deliberately NOT a markdown engine: the model is prompted
//! into a narrow output shape (hash headings, fully-bold sub-header lines,
//! flat `- ` lists, `---` day separators, paragraphs) and the renderer
//! mirrors exactly that shape.
//!
//! # Example
//!
//! ```
//! use itinera_renderer::{HtmlBackend, LineRenderer};
//!
//! let text = "### Day 1\n- Visit museum\n---";
//! let html = LineRenderer::<HtmlBackend>::new().render(text);
//! assert!(html.starts_with("<h3>Day 1</h3><li>Visit museum</li>"));
//! ```
//!
//! # Caveats
//!
//! - List items are emitted as bare `<li>` fragments with no enclosing
//!   list container; the embedding page supplies the wrapper (see the
//!   `itinera-view` crate).
//! - Input is not escaped. The output is model text inserted into a page
//!   the caller controls; callers that ever feed untrusted text through
//!   this renderer must sanitize before or after.

mod backend;
mod html;
mod inline;
mod line;
mod renderer;

pub use backend::{MarkupBackend, PlainBackend};
pub use html::HtmlBackend;
pub use inline::bold_spans;
pub use line::{LineKind, classify};
pub use renderer::{LineRenderer, render_html};

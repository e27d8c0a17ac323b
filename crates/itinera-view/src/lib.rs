//! View-state model and page regions for the itinerary page.
//!
//! The page has three fixed regions: a loading indicator, the rendered
//! itinerary, and an error banner. Exactly one is visible at a time.
//! Instead of toggling region visibility imperatively, the page state is an
//! explicit enum and a single function maps each state to the one visible
//! region's markup.
//!
//! The result region also supplies the content container that the
//! renderer's bare `<li>` fragments rely on: `itinera-renderer` emits list
//! items with no enclosing list, so wrapping is this crate's (the caller's)
//! responsibility.

mod escape;
mod region;

pub use escape::escape_html;
pub use region::{ViewState, render_region};

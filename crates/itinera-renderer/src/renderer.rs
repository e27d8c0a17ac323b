//! Line-oriented renderer with pluggable backend.

use std::marker::PhantomData;
use std::sync::LazyLock;

use regex::Regex;

use crate::backend::MarkupBackend;
use crate::html::HtmlBackend;
use crate::inline::bold_spans;
use crate::line::{LineKind, classify};

// Heading prefix stripping is a global pattern removal: every run of the
// matched hash count plus trailing whitespace is removed, anywhere in the
// line, so a stray second hash-run later in the text is stripped too.
static H3_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"###\s*").unwrap());
static H2_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"##\s*").unwrap());
static H1_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\s*").unwrap());

/// Line-oriented lightweight-markup renderer.
///
/// Splits input on `\n`, classifies each line independently and emits one
/// markup fragment per line through the backend `B`. Fragments are
/// concatenated in input order with no separators; blank lines contribute
/// the empty fragment. Pure: no I/O, total over all string inputs.
pub struct LineRenderer<B: MarkupBackend> {
    output: String,
    _backend: PhantomData<B>,
}

impl<B: MarkupBackend> LineRenderer<B> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(1024),
            _backend: PhantomData,
        }
    }

    /// Render a block of itinerary text to a single markup string.
    pub fn render(&mut self, text: &str) -> String {
        for line in text.split('\n') {
            self.render_line(line);
        }
        std::mem::take(&mut self.output)
    }

    /// Emit the fragment for one line.
    fn render_line(&mut self, line: &str) {
        match classify(line) {
            LineKind::Heading3 => {
                B::heading(3, &H3_RUN_RE.replace_all(line, ""), &mut self.output);
            }
            LineKind::Heading2 => {
                B::heading(2, &H2_RUN_RE.replace_all(line, ""), &mut self.output);
            }
            LineKind::Heading1 => {
                B::heading(1, &H1_RUN_RE.replace_all(line, ""), &mut self.output);
            }
            LineKind::StandaloneBold => {
                // Whole-line bold is a sub-header by convention, so every
                // delimiter goes and the remainder becomes an h3.
                B::heading(3, &line.replace("**", ""), &mut self.output);
            }
            LineKind::ListItem => {
                // classify guarantees the "- " prefix.
                let item = line.strip_prefix('-').map_or(line, str::trim_start);
                B::list_item(item, &mut self.output);
            }
            LineKind::Rule => B::horizontal_rule(&mut self.output),
            LineKind::Paragraph => B::paragraph(&bold_spans(line), &mut self.output),
            LineKind::Blank => {}
        }
    }
}

impl<B: MarkupBackend> Default for LineRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Render with the themed [`HtmlBackend`].
#[must_use]
pub fn render_html(text: &str) -> String {
    LineRenderer::<HtmlBackend>::new().render(text)
}

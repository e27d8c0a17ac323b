//! `render` command: transform itinerary text into markup.

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use itinera_config::{CliSettings, Config, Theme};
use itinera_renderer::{HtmlBackend, LineRenderer, PlainBackend};
use itinera_view::{ViewState, render_region};

use crate::error::CliError;

/// Theme selection on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum ThemeArg {
    /// Inline presentation attributes on the horizontal rule.
    Styled,
    /// Bare structural tags only.
    Plain,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Styled => Theme::Styled,
            ThemeArg::Plain => Theme::Plain,
        }
    }
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Input file with itinerary text (stdin when omitted).
    input: Option<PathBuf>,

    /// Write markup to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Markup theme (overrides the config file).
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Path to itinera.toml (auto-discovered when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Wrap the markup in the page's result region.
    #[arg(long)]
    page: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let settings = CliSettings {
            theme: self.theme.map(Theme::from),
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;

        let text = match &self.input {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        tracing::info!(
            lines = text.split('\n').count(),
            theme = ?config.render.theme,
            "rendering itinerary"
        );

        let markup = match config.render.theme {
            Theme::Styled => LineRenderer::<HtmlBackend>::new().render(&text),
            Theme::Plain => LineRenderer::<PlainBackend>::new().render(&text),
        };
        let markup = if self.page {
            render_region(&ViewState::Result(markup))
        } else {
            markup
        };

        match &self.output {
            Some(path) => std::fs::write(path, &markup)?,
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(markup.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }

        Ok(())
    }
}

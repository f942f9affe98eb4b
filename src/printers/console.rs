use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use super::TablePrinter;
use crate::color::ColorPair;
use crate::terminal;

/// Printer for an interactive terminal.
///
/// Fragments with a color set are wrapped in crossterm color commands and
/// followed by a reset, so each fragment leaves the terminal colors as it
/// found them. Output is flushed at every line end.
#[derive(Debug)]
pub struct ConsolePrinter<W: Write> {
    writer: W,
    colors: bool,
}

impl ConsolePrinter<io::Stdout> {
    /// Printer for standard output.
    ///
    /// Colors follow the environment (`NO_COLOR`, `FORCE_COLOR`, `TERM`
    /// and whether stdout is a terminal).
    #[must_use]
    pub fn stdout() -> Self {
        let colors = terminal::colors_enabled();
        if !colors {
            log::debug!("console printer: colors disabled by environment");
        }
        Self {
            writer: io::stdout(),
            colors,
        }
    }
}

impl<W: Write> ConsolePrinter<W> {
    /// Wrap a writer, with colors enabled.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            colors: true,
        }
    }

    /// Enable or disable color output.
    #[must_use]
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Check whether color commands are emitted.
    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// Unwrap the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, colors: ColorPair) -> io::Result<()> {
        if !self.colors || colors.is_plain() {
            return self.writer.write_all(text.as_bytes());
        }

        if let Some(foreground) = colors.foreground {
            queue!(self.writer, SetForegroundColor(foreground.into()))?;
        }
        if let Some(background) = colors.background {
            queue!(self.writer, SetBackgroundColor(background.into()))?;
        }
        queue!(self.writer, Print(text), ResetColor)
    }
}

impl<W: Write> TablePrinter for ConsolePrinter<W> {
    fn write_border(&mut self, text: &str, colors: ColorPair) -> io::Result<()> {
        self.write_colored(text, colors)
    }

    fn write_title(&mut self, text: &str, colors: ColorPair) -> io::Result<()> {
        self.write_colored(text, colors)
    }

    fn write_header(&mut self, text: &str, colors: ColorPair) -> io::Result<()> {
        self.write_colored(text, colors)
    }

    fn write_normal(&mut self, text: &str, colors: ColorPair) -> io::Result<()> {
        self.write_colored(text, colors)
    }

    fn write_line(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

use std::io::{self, Write};

use super::TablePrinter;
use crate::color::ColorPair;

/// Printer writing plain text to a byte stream.
///
/// Colors are ignored. Lines end with `\n`. This is the printer used for
/// deterministic capture: `StreamPrinter::buffer()` collects into memory.
///
/// ```
/// use console_tables::printers::{StreamPrinter, TablePrinter};
/// use console_tables::color::ColorPair;
///
/// let mut printer = StreamPrinter::buffer();
/// printer.write_line_border("+--+", ColorPair::PLAIN).unwrap();
/// assert_eq!(printer.into_string(), "+--+\n");
/// ```
#[derive(Debug)]
pub struct StreamPrinter<W: Write> {
    writer: W,
}

impl<W: Write> StreamPrinter<W> {
    /// Wrap a writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwrap the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Flush the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }
}

impl StreamPrinter<Vec<u8>> {
    /// Create a printer collecting output in memory.
    #[must_use]
    pub fn buffer() -> Self {
        Self::new(Vec::new())
    }

    /// Get the collected output as text.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }

    /// Consume the printer and return the collected output as text.
    #[must_use]
    pub fn into_string(self) -> String {
        String::from_utf8(self.writer)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
    }
}

impl<W: Write> TablePrinter for StreamPrinter<W> {
    fn write_border(&mut self, text: &str, _colors: ColorPair) -> io::Result<()> {
        self.write_text(text)
    }

    fn write_title(&mut self, text: &str, _colors: ColorPair) -> io::Result<()> {
        self.write_text(text)
    }

    fn write_header(&mut self, text: &str, _colors: ColorPair) -> io::Result<()> {
        self.write_text(text)
    }

    fn write_normal(&mut self, text: &str, _colors: ColorPair) -> io::Result<()> {
        self.write_text(text)
    }

    fn write_line(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n")
    }
}

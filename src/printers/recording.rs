use std::io;

use super::TablePrinter;
use crate::color::ColorPair;
use crate::segment::{Segment, SegmentKind, split_lines};

/// Printer that records every fragment as a [`Segment`].
///
/// Useful for checking which content class and colors the renderer used
/// for each piece of output.
#[derive(Debug, Clone, Default)]
pub struct RecordingPrinter {
    segments: Vec<Segment>,
}

impl RecordingPrinter {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded segments, in emission order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consume the recorder and return its segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Concatenated text, with `\n` for line breaks.
    #[must_use]
    pub fn plain(&self) -> String {
        self.segments.iter().map(ToString::to_string).collect()
    }

    /// Text of each recorded line, without terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        split_lines(&self.segments)
            .into_iter()
            .map(|line| line.iter().map(|segment| segment.text.as_str()).collect())
            .collect()
    }

    fn record(&mut self, text: &str, kind: SegmentKind, colors: ColorPair) {
        self.segments.push(Segment::new(text, kind, colors));
    }
}

impl TablePrinter for RecordingPrinter {
    fn write_border(&mut self, text: &str, colors: ColorPair) -> io::Result<()> {
        self.record(text, SegmentKind::Border, colors);
        Ok(())
    }

    fn write_title(&mut self, text: &str, colors: ColorPair) -> io::Result<()> {
        self.record(text, SegmentKind::Title, colors);
        Ok(())
    }

    fn write_header(&mut self, text: &str, colors: ColorPair) -> io::Result<()> {
        self.record(text, SegmentKind::Header, colors);
        Ok(())
    }

    fn write_normal(&mut self, text: &str, colors: ColorPair) -> io::Result<()> {
        self.record(text, SegmentKind::Normal, colors);
        Ok(())
    }

    fn write_line(&mut self) -> io::Result<()> {
        self.segments.push(Segment::line());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let mut printer = RecordingPrinter::new();
        printer.write_border("|", ColorPair::PLAIN).unwrap();
        printer.write_normal(" x ", ColorPair::PLAIN).unwrap();
        printer.write_border("|", ColorPair::PLAIN).unwrap();
        printer.write_line().unwrap();
        printer.write_line_border("+---+", ColorPair::PLAIN).unwrap();

        assert_eq!(printer.lines(), ["| x |", "+---+"]);
        assert_eq!(printer.plain(), "| x |\n+---+\n");
        assert_eq!(printer.into_segments().len(), 6);
    }
}

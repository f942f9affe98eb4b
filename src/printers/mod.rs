//! Output sinks for rendered tables.
//!
//! The renderer never writes bytes itself. It sends typed fragments
//! (border, title, header, normal text and line breaks) to a
//! [`TablePrinter`], passing along the colors configured for each fragment.
//! What happens to those colors is up to the printer:
//!
//! - [`StreamPrinter`] writes plain text to any [`std::io::Write`]
//! - [`ConsolePrinter`] wraps colored fragments in terminal color commands
//! - [`RecordingPrinter`] keeps every fragment as a [`Segment`](crate::segment::Segment)

mod console;
mod recording;
mod stream;

pub use console::ConsolePrinter;
pub use recording::RecordingPrinter;
pub use stream::StreamPrinter;

use std::io;

use crate::color::ColorPair;
use crate::segment::SegmentKind;

/// Receiver of rendered table fragments.
///
/// Calls arrive in emission order: top to bottom, left to right within a
/// line. Errors are returned to the caller of the render unchanged.
pub trait TablePrinter {
    /// Write frame glyphs or a separator line.
    fn write_border(&mut self, text: &str, colors: ColorPair) -> io::Result<()>;

    /// Write title row content.
    fn write_title(&mut self, text: &str, colors: ColorPair) -> io::Result<()>;

    /// Write column header content.
    fn write_header(&mut self, text: &str, colors: ColorPair) -> io::Result<()>;

    /// Write data cell content.
    fn write_normal(&mut self, text: &str, colors: ColorPair) -> io::Result<()>;

    /// End the current line.
    fn write_line(&mut self) -> io::Result<()>;

    /// Write a single border glyph.
    fn write_border_char(&mut self, glyph: char, colors: ColorPair) -> io::Result<()> {
        let mut buffer = [0u8; 4];
        self.write_border(glyph.encode_utf8(&mut buffer), colors)
    }

    /// Write a complete border line and end it.
    fn write_line_border(&mut self, text: &str, colors: ColorPair) -> io::Result<()> {
        self.write_border(text, colors)?;
        self.write_line()
    }

    /// Dispatch a fragment to the write call for its kind.
    fn write_fragment(&mut self, kind: SegmentKind, text: &str, colors: ColorPair) -> io::Result<()> {
        match kind {
            SegmentKind::Border => self.write_border(text, colors),
            SegmentKind::Title => self.write_title(text, colors),
            SegmentKind::Header => self.write_header(text, colors),
            SegmentKind::Normal => self.write_normal(text, colors),
            SegmentKind::LineBreak => self.write_line(),
        }
    }
}

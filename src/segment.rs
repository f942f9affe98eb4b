//! Segment - one recorded printer write.
//!
//! The renderer talks to printers through typed calls. A [`Segment`] is the
//! value form of such a call: the text, which content class it belongs to,
//! and the colors it was written with. [`RecordingPrinter`] collects them so
//! the emission order can be inspected.
//!
//! [`RecordingPrinter`]: crate::printers::RecordingPrinter

use std::fmt;

use crate::color::ColorPair;

/// Content class of a written fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Frame glyphs and separator lines.
    Border,
    /// Title row content.
    Title,
    /// Column header content.
    Header,
    /// Data cell content.
    Normal,
    /// End of an output line.
    LineBreak,
}

/// A piece of text written with one content class and one color pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The text content (empty for line breaks).
    pub text: String,
    /// Which printer call produced the text.
    pub kind: SegmentKind,
    /// The colors passed with the call.
    pub colors: ColorPair,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: SegmentKind, colors: ColorPair) -> Self {
        Self {
            text: text.into(),
            kind,
            colors,
        }
    }

    /// Create a line break segment.
    #[must_use]
    pub fn line() -> Self {
        Self::new("", SegmentKind::LineBreak, ColorPair::PLAIN)
    }

    /// Check if this segment ends a line.
    #[must_use]
    pub fn is_line_break(&self) -> bool {
        self.kind == SegmentKind::LineBreak
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_line_break() {
            f.write_str("\n")
        } else {
            f.write_str(&self.text)
        }
    }
}

/// Split segments into lines at line break segments.
///
/// A trailing line break does not open an extra empty line.
#[must_use]
pub fn split_lines(segments: &[Segment]) -> Vec<Vec<&Segment>> {
    let mut lines: Vec<Vec<&Segment>> = Vec::new();
    let mut current: Vec<&Segment> = Vec::new();

    for segment in segments {
        if segment.is_line_break() {
            lines.push(std::mem::take(&mut current));
        } else {
            current.push(segment);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
